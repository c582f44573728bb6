use dioxus::prelude::*;

/// One slot in the pagination row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

const PAGE_RANGE: u32 = 5;
const MARGIN: u32 = 1;

/// Pages shown: the first and last page always, plus a window of up to
/// five pages around the current one, with ellipsis gaps where pages
/// are skipped.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= PAGE_RANGE + 2 * MARGIN {
        return (1..=total).map(PageItem::Page).collect();
    }

    let half = PAGE_RANGE / 2;
    let mut window_start = current.saturating_sub(half).max(1);
    let mut window_end = window_start + PAGE_RANGE - 1;
    if window_end > total {
        window_end = total;
        window_start = window_end + 1 - PAGE_RANGE;
    }

    let mut items = Vec::new();
    let mut last = 0u32;
    for page in 1..=total {
        let in_margin = page <= MARGIN || page > total - MARGIN;
        let in_window = page >= window_start && page <= window_end;
        if in_margin || in_window {
            if last != 0 && page != last + 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(page));
            last = page;
        }
    }
    items
}

/// Page picker. Callers only mount this when `total > 1`; the guard here
/// keeps a stray single-page render from showing an empty nav.
#[component]
pub fn Pagination(current: u32, total: u32, on_select: EventHandler<u32>) -> Element {
    if total <= 1 {
        return rsx! {};
    }

    rsx! {
        nav { class: "flex items-center justify-center gap-1 py-6",
            button {
                class: "px-3 py-2 rounded text-sm text-gray-300 hover:bg-gray-700 disabled:opacity-40",
                disabled: current <= 1,
                onclick: move |_| {
                    if current > 1 {
                        on_select.call(current - 1);
                    }
                },
                "←"
            }
            for (index, item) in page_items(current, total).into_iter().enumerate() {
                if let PageItem::Page(page) = item {
                    button {
                        key: "{index}",
                        class: if page == current {
                            "px-3 py-2 rounded text-sm bg-blue-600 text-white"
                        } else {
                            "px-3 py-2 rounded text-sm text-gray-300 hover:bg-gray-700"
                        },
                        onclick: move |_| on_select.call(page),
                        "{page}"
                    }
                } else {
                    span { key: "{index}", class: "px-2 text-gray-500", "…" }
                }
            }
            button {
                class: "px-3 py-2 rounded text-sm text-gray-300 hover:bg-gray-700 disabled:opacity-40",
                disabled: current >= total,
                onclick: move |_| {
                    if current < total {
                        on_select.call(current + 1);
                    }
                },
                "→"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(p) => Some(*p),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(pages(&page_items(1, 1)), vec![Some(1)]);
        assert_eq!(
            pages(&page_items(3, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        // 7 = range + both margins, still no ellipsis
        assert_eq!(page_items(4, 7).len(), 7);
    }

    #[test]
    fn large_totals_window_around_current() {
        // Current in the middle: 1 … 8 9 10 11 12 … 20
        assert_eq!(
            pages(&page_items(10, 20)),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn window_clamps_at_the_edges() {
        // Near the start the window absorbs the left margin
        assert_eq!(
            pages(&page_items(1, 20)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
        // Near the end it absorbs the right margin
        assert_eq!(
            pages(&page_items(20, 20)),
            vec![
                Some(1),
                None,
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn every_row_contains_current_first_and_last() {
        for total in [8u32, 13, 50, 500] {
            for current in 1..=total.min(60) {
                let row = page_items(current, total);
                let nums: Vec<u32> = row
                    .iter()
                    .filter_map(|item| match item {
                        PageItem::Page(p) => Some(*p),
                        PageItem::Ellipsis => None,
                    })
                    .collect();
                assert!(nums.contains(&current), "current {} missing", current);
                assert_eq!(nums.first(), Some(&1));
                assert_eq!(nums.last(), Some(&total));
                // Strictly increasing, no duplicates
                assert!(nums.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
