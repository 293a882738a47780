use yew::prelude::*;

use crate::page::FooterView;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub view: FooterView,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    html! {
      <footer class="site-footer">
        <p>{ props.view.text() }</p>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::current_year;

    #[tokio::test]
    async fn shows_current_year_and_brand() {
        let year = current_year();
        let html = yew::ServerRenderer::<SiteFooter>::with_props(move || SiteFooterProps {
            view: FooterView {
                year,
                brand: "TajRoyal".into(),
            },
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains(&format!("© {year} TajRoyal. All rights reserved.")));
    }
}
