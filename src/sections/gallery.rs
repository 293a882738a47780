use yew::prelude::*;

use crate::page::{Thumbnail, GALLERY_HEADING};

const HOVER_SCALE: f32 = 1.05;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub thumbnails: Vec<Thumbnail>,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GalleryProps) -> Html {
    html! {
      <section class="gallery">
        <h2 class="section-title">{ GALLERY_HEADING }</h2>
        <div class="gallery-grid">
          { for props.thumbnails.iter().enumerate().map(|(i, thumb)| html! {
              <GalleryThumb key={i} thumb={thumb.clone()} />
          }) }
        </div>
      </section>
    }
}

#[derive(Properties, PartialEq)]
struct ThumbProps {
    thumb: Thumbnail,
}

#[function_component(GalleryThumb)]
fn gallery_thumb(props: &ThumbProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let scale = if *hovered { HOVER_SCALE } else { 1.0 };
    let style = format!("transform: scale({scale});");

    html! {
      <img
        class="thumb"
        src={props.thumb.src.clone()}
        alt={props.thumb.alt.clone()}
        {style}
        {onmouseenter}
        {onmouseleave}
      />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn one_thumbnail_per_image_in_order() {
        let thumbnails: Vec<Thumbnail> = (1..=4)
            .map(|n| Thumbnail {
                src: format!("/assets/gallery-{n}.jpg"),
                alt: format!("Gallery {n}"),
            })
            .collect();
        let html =
            yew::ServerRenderer::<GallerySection>::with_props(move || GalleryProps { thumbnails })
                .hydratable(false)
                .render()
                .await;

        assert!(html.contains(GALLERY_HEADING));
        assert_eq!(html.matches("class=\"thumb\"").count(), 4);
        let positions: Vec<usize> = (1..=4)
            .map(|n| {
                html.find(&format!("/assets/gallery-{n}.jpg"))
                    .expect("thumbnail src")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("alt=\"Gallery 4\""));
        // resting scale until hovered
        assert!(html.contains("transform: scale(1);"));
    }
}
