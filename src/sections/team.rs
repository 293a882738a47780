use yew::prelude::*;

use crate::page::{Card, TEAM_HEADING};

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub cards: Vec<Card>,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamProps) -> Html {
    html! {
      <section class="team">
        <h2 class="section-title">{ TEAM_HEADING }</h2>
        <div class="team-grid">
          { for props.cards.iter().enumerate().map(|(i, member)| html! {
              <div class="card team-card" key={i}>
                <h3 class="card-title">{ member.title.clone() }</h3>
                <p class="role">{ member.body.clone() }</p>
              </div>
          }) }
        </div>
      </section>
    }
}
