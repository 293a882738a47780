use yew::prelude::*;

use crate::page::HeaderView;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub view: HeaderView,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let v = &props.view;
    html! {
      <header class="site-header">
        <div class="brand">
          <img class="logo" src={v.logo_src.clone()} alt={v.logo_alt.clone()} />
          <h1 class="brand-name">{ v.brand.clone() }</h1>
        </div>
        <p class="tagline">{ v.tagline.clone() }</p>
      </header>
    }
}
