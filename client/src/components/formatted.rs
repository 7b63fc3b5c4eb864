//! Renderers for formatter output.
//!
//! The single place where [`FormattedBlock`] and [`InlineSpan`] meet the
//! DOM. Everything upstream stays markup-free so these matches are
//! exhaustive by construction.

use blocks::{BULLET_GLYPH, FormattedBlock, InlineSpan, format_bold_text, format_text};
use leptos::prelude::*;

/// Block-level rendering of raw model text.
#[component]
pub fn FormattedText(text: String) -> impl IntoView {
    view! {
        <div class="formatted">
            {format_text(&text)
                .into_iter()
                .map(|block| match block {
                    FormattedBlock::Heading { text } => {
                        view! { <h3 class="formatted__heading">{text}</h3> }.into_any()
                    }
                    FormattedBlock::NumberedItem { marker, content } => view! {
                        <div class="formatted__item">
                            <span class="formatted__marker">{marker}</span>
                            <span class="formatted__body">{spans(content)}</span>
                        </div>
                    }
                    .into_any(),
                    FormattedBlock::BulletItem { content } => view! {
                        <div class="formatted__item">
                            <span class="formatted__marker">{BULLET_GLYPH}</span>
                            <span class="formatted__body">{spans(content)}</span>
                        </div>
                    }
                    .into_any(),
                    FormattedBlock::Paragraph { content } => view! {
                        <p class="formatted__paragraph">{spans(content)}</p>
                    }
                    .into_any(),
                })
                .collect_view()}
        </div>
    }
}

/// Inline rendering with `**bold**` emphasis only.
#[component]
pub fn BoldText(text: String) -> impl IntoView {
    view! { <span class="formatted__inline">{spans(format_bold_text(&text))}</span> }
}

fn spans(content: Vec<InlineSpan>) -> impl IntoView {
    content
        .into_iter()
        .map(|span| match span {
            InlineSpan::PlainText(text) => view! { <span>{text}</span> }.into_any(),
            // Bold segments render as their own line.
            InlineSpan::BoldBlock(text) => {
                view! { <strong class="formatted__bold">{text}</strong> }.into_any()
            }
        })
        .collect_view()
}
