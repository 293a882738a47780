use yew::prelude::*;

use crate::page::Card;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub cards: Vec<Card>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesProps) -> Html {
    html! {
      <section class="services">
        { for props.cards.iter().enumerate().map(|(i, card)| html! {
            <div class="card service-card" key={i}>
              <h3 class="card-title">{ card.title.clone() }</h3>
              <p class="card-body">{ card.body.clone() }</p>
            </div>
        }) }
      </section>
    }
}
