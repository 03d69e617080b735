use dioxus::prelude::*;
use types::StatTile;

#[component]
pub fn StatCard(tile: StatTile) -> Element {
    let card_class = format!("stat-card {}", tile.color.css_class());
    let icon_class = tile
        .icon
        .map(|icon| format!("stat-card-icon {}", icon.css_class()));

    rsx! {
        div { class: "{card_class}",
            div { class: "stat-card-body",
                p { class: "stat-card-title", "{tile.title}" }
                h3 { class: "stat-card-value", "{tile.value}" }
                if let Some(subtitle) = &tile.subtitle {
                    p { class: "stat-card-subtitle", "{subtitle}" }
                }
            }
            if let Some(icon_class) = icon_class {
                span { class: "{icon_class}" }
            }
        }
    }
}

/// A row of stat cards, in the order given.
#[component]
pub fn StatPanel(tiles: Vec<StatTile>) -> Element {
    rsx! {
        div { class: "stat-grid",
            for (i, tile) in tiles.into_iter().enumerate() {
                StatCard { key: "{i}", tile }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use types::{ColorTheme, Icon};

    #[test]
    fn optional_parts_are_omitted() {
        fn app(tile: StatTile) -> Element {
            rsx! { StatCard { tile } }
        }

        let html = render(app, StatTile::new("Hires", "3"));
        assert!(html.contains(r#"<h3 class="stat-card-value">3</h3>"#), "{html}");
        assert!(!html.contains("stat-card-subtitle"));
        assert!(!html.contains("stat-card-icon"));
    }

    #[test]
    fn theme_and_icon_become_classes() {
        fn app(tile: StatTile) -> Element {
            rsx! { StatCard { tile } }
        }

        let tile = StatTile::new("Hires", "3")
            .icon(Icon::CheckCircle)
            .subtitle("This quarter")
            .color(ColorTheme::Green);
        let html = render(app, tile);

        assert!(html.contains("stat-card theme-green"), "{html}");
        assert!(html.contains("stat-card-icon icon-check-circle"));
        assert!(html.contains("This quarter"));
    }
}
