use crate::output::Output;
use anyhow::Context;
use http::{Method, Request, Response, StatusCode, Uri, Version};
use httparse::Status;
use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    str::FromStr,
    time::{Duration, Instant},
};

/// Requests larger than this are dropped.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Idle clients are dropped after this long without sending anything.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub fn serve(start: Instant, addr: &str, output: &Output) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).with_context(|| format!("couldn't bind {addr}"))?;

    tracing::info!(
        "({:.1}s) Serving on http://{addr}",
        start.elapsed().as_secs_f32()
    );

    std::thread::scope(|scope| {
        for stream in listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("couldn't accept connection: {e}");
                    continue;
                }
            };
            scope.spawn(move || handle_connection(stream, output));
        }
    });

    Ok(())
}

fn handle_connection(mut stream: TcpStream, output: &Output) {
    if let Err(e) = stream.set_read_timeout(Some(READ_TIMEOUT)) {
        tracing::debug!("couldn't set read timeout: {e}");
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };

    let response = respond(&request, output);
    tracing::info!("[{}] {} {}", response.status(), request.method(), request.uri());

    if let Err(e) = write_response(&mut stream, &response) {
        tracing::debug!("couldn't write response: {e}");
    }
}

fn read_request(stream: &mut TcpStream) -> Option<Request<()>> {
    let mut buf = Vec::new();

    loop {
        let mut tmp = [0u8; 1024];
        match stream.read(&mut tmp) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&tmp[0..n]),
        }

        if let Some(request) = parse_request(&buf) {
            return request;
        }
        if buf.len() > MAX_REQUEST_BYTES {
            return None;
        }
    }
}

/// `None` if more bytes are needed, `Some(None)` if the request is invalid.
fn parse_request(buf: &[u8]) -> Option<Option<Request<()>>> {
    let mut headers = [httparse::EMPTY_HEADER; 128];
    let mut parse_req = httparse::Request::new(&mut headers);
    match parse_req.parse(buf) {
        Ok(Status::Complete(_)) => {}
        Ok(Status::Partial) => return None,
        Err(_) => return Some(None),
    }

    let request = (|| {
        let method = Method::from_str(parse_req.method?).ok()?;
        let uri = Uri::from_str(parse_req.path?).ok()?;
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .version(if parse_req.version == Some(1) {
                Version::HTTP_11
            } else {
                Version::HTTP_10
            });
        for header in parse_req.headers.iter() {
            builder = builder.header(header.name, header.value);
        }
        builder.body(()).ok()
    })();
    Some(request)
}

pub fn respond<B>(request: &Request<B>, output: &Output) -> Response<Vec<u8>> {
    let mut path = request.uri().path().to_owned();
    if path.ends_with('/') {
        path.push_str("index.html");
    }

    let method = request.method();
    let (status, mime, body) = if method != Method::GET && method != Method::HEAD {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain; charset=utf-8",
            b"method not allowed".to_vec(),
        )
    } else if let Some(file) = output.get(&path) {
        (StatusCode::OK, content_type(&path), file.clone())
    } else {
        (
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            b"not found".to_vec(),
        )
    };

    let body = if method == Method::HEAD {
        Vec::new()
    } else {
        body
    };

    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.version_mut() = request.version();
    if let Ok(value) = mime.parse() {
        response.headers_mut().insert(http::header::CONTENT_TYPE, value);
    }
    response
}

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, extension)| extension) {
        Some("html") => "text/html; charset=utf-8",
        Some("json") => "application/manifest+json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn write_response(stream: &mut TcpStream, response: &Response<Vec<u8>>) -> std::io::Result<()> {
    let status_line = format!(
        "{:?} {} {}\r\n",
        response.version(),
        response.status().as_u16(),
        response.status().canonical_reason().unwrap_or_default()
    );

    let mut headers = String::new();
    for (name, value) in response.headers() {
        headers.push_str(&format!("{}: {}\r\n", name, value.to_str().unwrap_or("")));
    }

    let body: &[u8] = response.body().as_ref();
    headers.push_str(&format!("Content-Length: {}\r\n", body.len()));
    headers.push_str("Connection: close\r\n\r\n");

    stream.write_all(status_line.as_bytes())?;
    stream.write_all(headers.as_bytes())?;
    stream.write_all(body)?;
    stream.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> Output {
        let mut output = Output::new();
        output.insert("/index.html".to_owned(), b"<!DOCTYPE html>".to_vec());
        output.insert("/robots.txt".to_owned(), b"User-agent: *".to_vec());
        output
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn directory_serves_index() {
        let response = respond(&get("/"), &output());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"<!DOCTYPE html>");
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn query_ignored() {
        let response = respond(&get("/robots.txt?x=1"), &output());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"User-agent: *");
    }

    #[test]
    fn unknown_path() {
        let response = respond(&get("/missing.html"), &output());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn head_and_post() {
        let head = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(())
            .unwrap();
        let response = respond(&head, &output());
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());

        let post = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(())
            .unwrap();
        assert_eq!(
            respond(&post, &output()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn parses_requests() {
        assert!(parse_request(b"GET / HTTP/1.1\r\nHost: local").is_none());
        let request = parse_request(b"GET /robots.txt HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.uri().path(), "/robots.txt");
        assert_eq!(request.version(), Version::HTTP_11);
        assert!(matches!(parse_request(b"\x00\x01 nonsense\r\n\r\n"), Some(None)));
    }

    #[test]
    fn idle_client_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let mut client = TcpStream::connect(addr).unwrap();
        let (mut stream, _) = listener.accept().unwrap();

        client.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        handle_connection(stream.try_clone().unwrap(), &output());
        assert_eq!(stream.read_timeout().unwrap(), Some(READ_TIMEOUT));

        stream
            .set_read_timeout(Some(Duration::from_millis(50)))
            .unwrap();
        let started = Instant::now();
        assert!(read_request(&mut stream).is_none());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
