use yew::prelude::*;

use crate::page::HeroView;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub view: HeroView,
    /// Fired by the "Book Now" button. Nothing books yet; the App only logs.
    pub on_book: Callback<()>,
}

/// Inline background rule with the image path as a quoted CSS string.
fn background_style(src: &str) -> String {
    let mut quoted = String::with_capacity(src.len());
    for c in src.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            // newlines cannot appear raw inside a CSS string
            '\n' => quoted.push_str("\\a "),
            _ => quoted.push(c),
        }
    }
    format!("background-image: url(\"{quoted}\");")
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    let v = &props.view;
    let style = background_style(&v.background);

    // .hero-title carries a one-shot keyframe entrance in styles.css
    html! {
      <section class="hero" {style}>
        <h2 class="hero-title">{ v.heading.clone() }</h2>
        <p class="hero-tagline">{ v.tagline.clone() }</p>
        <button class="btn-book" type="button" {onclick}>{ v.cta_label }</button>
      </section>
    }
}
