use yew::{function_component, AttrValue, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub html: String,
}

/// Injects a trusted same-origin fragment as-is. Never feed this anything
/// that came from user input or API payloads.
#[function_component(FragmentHtml)]
pub fn fragment_html(props: &Props) -> Html {
    let html = format!("<div class=\"header-fragment\">{}</div>", props.html);
    Html::from_html_unchecked(AttrValue::from(html))
}
