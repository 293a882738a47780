mod clock;
mod content;
mod error;
mod loader;
mod page;
mod sections;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use clock::current_year;
use content::SiteContent;
use loader::{load_site_content, SITE_JSON_URL};
use page::Page;
use sections::{
    ContactSection, GallerySection, Hero, ServicesSection, SiteFooter, SiteHeader, TeamSection,
};

#[function_component(App)]
fn app() -> Html {
    // Bundled copy renders immediately; site.json replaces it once fetched.
    let content = use_state(|| match SiteContent::bundled() {
        Ok(c) => c,
        Err(e) => {
            console::error!(format!("bundled {e}"));
            SiteContent::empty()
        }
    });

    {
        let content = content.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_site_content(SITE_JSON_URL).await {
                    Ok(c) => content.set(c),
                    Err(e) => console::error!(format!("{e} (showing bundled content)")),
                }
            });
            || ()
        });
    }

    let page = Page::build(&content, current_year());

    // Placeholder until a booking service exists.
    let on_book = Callback::from(|_: ()| {
        console::log!("Book Now pressed: no booking service connected");
    });

    html! {
      <div class="page">
        <SiteHeader view={page.header} />
        <Hero view={page.hero} {on_book} />
        <ServicesSection cards={page.services} />
        <GallerySection thumbnails={page.gallery} />
        <TeamSection cards={page.team} />
        <ContactSection lines={page.contact} />
        <SiteFooter view={page.footer} />
      </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
