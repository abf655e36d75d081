use crate::site::{MenuAction, MenuState, HOME_ID, NAV_GROUPS};
use yew::{
    classes, events::MouseEvent, function_component, html, use_reducer, AttrValue, Callback,
    Html, Properties,
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

/// Site title, hamburger button and the anchor menu.
///
/// The menu starts closed. The hamburger toggles it and every link closes it.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_reducer(MenuState::default);

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };
    let close = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <header id="header">
            <h1 id="title">{props.title.clone()}</h1>
            <button
                class="hamburger"
                type="button"
                onclick={toggle}
                aria-label="Toggle Menu"
            >{"☰"}</button>
            <nav id="site_nav" class={classes!(menu.class())}>
                <a href={format!("#{HOME_ID}")} onclick={close.clone()}>{"Home"}</a>
                {NAV_GROUPS.iter().map(|group| html! {
                    <div class="dropdown" key={group.label}>
                        <button type="button">{group.label}</button>
                        <div class="dropdown-content">
                            {group.links().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.href()}
                                    onclick={close.clone()}
                                >{link.label}</a>
                            }).collect::<Html>()}
                        </div>
                    </div>
                }).collect::<Html>()}
            </nav>
        </header>
    }
}
