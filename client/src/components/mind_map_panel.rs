//! Mind-map overlay rendering the laid-out diagram.

use leptos::prelude::*;
use mindmap::layout::{LayoutConfig, layout};
use mindmap::outline::build_outline;
use mindmap::svg::render_svg;

use crate::net::types::Video;
use crate::state::ui::UiState;
use crate::util::export::export_png;

/// Side panel showing the video's mind map with a PNG download. The
/// outline and layout are computed once per open from the video payload.
#[component]
pub fn MindMapPanel(video: Video) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let outline = build_outline(video.summary.as_structured(), &video.title, &video.key_points);
    let heading = outline.label.clone();
    let has_branches = !outline.children.is_empty();
    let diagram = layout(&outline, &LayoutConfig::default());
    let svg = render_svg(&diagram);

    let close = move |_| ui.update(|u| u.mind_map_open = false);
    let on_download = move |_| export_png(&diagram, "mind-map.png");

    view! {
        <div class="overlay">
            <div class="overlay__backdrop" on:click=close></div>
            <div class="overlay__panel overlay__panel--right">
                <div class="overlay__header">
                    <h3 class="overlay__heading">{heading}</h3>
                    <div class="overlay__actions">
                        {has_branches
                            .then(|| view! {
                                <button class="btn mind-map__download" on:click=on_download>
                                    "Download PNG"
                                </button>
                            })}
                        <button class="overlay__close" on:click=close>"\u{2715}"</button>
                    </div>
                </div>
                {if has_branches {
                    view! { <div class="mind-map__diagram" inner_html=svg></div> }.into_any()
                } else {
                    view! {
                        <p class="overlay__empty">
                            "Mind map will appear once the summary or key points are available."
                        </p>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
