use yew::prelude::*;

use crate::page::{ContactLine, CONTACT_HEADING};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub lines: Vec<ContactLine>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    html! {
      <section class="contact">
        <h2 class="section-title">{ CONTACT_HEADING }</h2>
        <div class="contact-lines">
          { for props.lines.iter().map(|line| html! {
              <p>{ format!("{} {}", line.icon, line.text) }</p>
          }) }
        </div>
      </section>
    }
}
