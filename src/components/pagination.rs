//! Page-number strip for the paginated tables.

use leptos::prelude::*;

use crate::state::pagination::{PageItem, page_numbers};

/// Prev/next buttons plus windowed page numbers with ellipses. Hidden
/// entirely while there is at most one page.
#[component]
pub fn Pagination(
    current_page: RwSignal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
) -> impl IntoView {
    let prev = move |_| {
        current_page.update(|page| {
            if *page > 1 {
                *page -= 1;
            }
        });
    };
    let next = move |_: leptos::ev::MouseEvent| {
        let total = total_pages.get_untracked();
        current_page.update(|page| {
            if *page < total {
                *page += 1;
            }
        });
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="pagination__nav"
                    disabled=move || current_page.get() == 1
                    on:click=prev
                    aria-label="Previous page"
                >
                    "\u{2039}"
                </button>
                {move || {
                    page_numbers(current_page.get(), total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=move || current_page.get() == page
                                    on:click=move |_| current_page.set(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! {
                                <span class="pagination__ellipsis">"..."</span>
                            }
                            .into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__nav"
                    disabled=move || { current_page.get() >= total_pages.get() }
                    on:click=next
                    aria-label="Next page"
                >
                    "\u{203A}"
                </button>
            </div>
        </Show>
    }
}
