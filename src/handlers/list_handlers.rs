use anyhow::Result;
use p360_core::{get_sorted_group_names, group_items, Filters, GroupField, UNSPECIFIED_GROUP};

use crate::cli::ListArgs;
use crate::images::{HttpImageProvider, ImageProvider, ProductImage};
use crate::state::SessionState;
use crate::ui::{format_item_card, format_page_controls, format_page_header, set_status, StatusLevel};

/// Apply the list arguments to the session filters, sort and page
pub fn apply_list_args(state: &mut SessionState, args: &ListArgs) {
    state.filters = Filters {
        name_query: args.query.clone(),
        segment: args.segment.clone(),
        brand: args.brand.clone(),
    };
    state.sort = args.sort;
    state.page = args.page.max(1);
    if let Some(per_page) = args.per_page {
        state.config.items_per_page = per_page.max(1);
    }
}

/// Render the current page as product cards
pub async fn render_page(
    state: &SessionState,
    group_by: Option<GroupField>,
    images: Option<&dyn ImageProvider>,
) -> String {
    let view = state.page_view();
    let mut sections = vec![format_page_header(&view)];

    if view.items.is_empty() {
        sections.push("No products match the current filters.".to_string());
        return sections.join("\n\n");
    }

    let mut fetched: Vec<Option<ProductImage>> = Vec::with_capacity(view.items.len());
    for item in &view.items {
        fetched.push(match images {
            Some(provider) => Some(provider.fetch(&item.image_url).await),
            None => None,
        });
    }
    let missing = fetched.iter().flatten().filter(|image| image.is_placeholder()).count();
    let card = |idx: usize| format_item_card(&view.items[idx], fetched[idx].as_ref());

    match group_by {
        Some(field) => {
            let groups = group_items(&view.items, field);
            for name in get_sorted_group_names(&groups) {
                let heading = if name == UNSPECIFIED_GROUP {
                    "(unspecified)".to_string()
                } else {
                    name.clone()
                };
                sections.push(format!("== {} ==", heading));
                for item in &groups[&name] {
                    if let Some(idx) = view.items.iter().position(|i| i == item) {
                        sections.push(card(idx));
                    }
                }
            }
        }
        None => sections.extend((0..view.items.len()).map(card)),
    }

    if missing > 0 {
        sections.push(format!("{} of {} product images unavailable", missing, view.items.len()));
    }

    let controls = format_page_controls(&view);
    if !controls.is_empty() {
        sections.push(controls);
    }
    sections.join("\n\n")
}

/// `list`: one page of the filtered catalog
pub async fn handle_list(state: &mut SessionState, args: &ListArgs) -> Result<()> {
    apply_list_args(state, args);

    let provider = args.images.then(HttpImageProvider::new);
    let text = render_page(
        state,
        args.group_by,
        provider.as_ref().map(|p| p as &dyn ImageProvider),
    )
    .await;
    println!("{}", text);

    if args.page > state.page_view().page_number {
        set_status(
            format!("Page {} is out of range, showing the last page", args.page),
            StatusLevel::Warning,
        );
    }
    Ok(())
}
