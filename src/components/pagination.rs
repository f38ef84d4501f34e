use yew::prelude::*;

const WINDOW: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Number(u32),
    Gap,
}

pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(u64::from(page_size)) as u32
}

/// Page 1, the last page and everything within two of the current page.
/// A hole of a single page is filled in rather than shown as a gap.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    let mut numbers = Vec::new();
    for page in 1..=total {
        if page == 1 || page == total || page.abs_diff(current) <= WINDOW {
            numbers.push(page);
        }
    }

    let mut items = Vec::with_capacity(numbers.len() + 2);
    let mut previous: Option<u32> = None;
    for page in numbers {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Number(prev + 1)),
                _ => items.push(PageItem::Gap),
            }
        }
        items.push(PageItem::Number(page));
        previous = Some(page);
    }
    items
}

/// Whether the previous and next controls are disabled.
pub fn nav_disabled(page: u32, total: u32) -> (bool, bool) {
    (page <= 1, page >= total)
}

pub fn summary_text(page: u32, page_size: u32, count: u64) -> String {
    if count == 0 {
        return "No results found".to_string();
    }
    let size = u64::from(page_size);
    let start = u64::from(page.max(1) - 1) * size + 1;
    let end = (u64::from(page.max(1)) * size).min(count);
    format!("Showing {start} to {end} of {count} results")
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub count: u64,
    pub page_size: u32,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total = total_pages(props.count, props.page_size);
    let page = props.page;
    let (at_start, at_end) = nav_disabled(page, total);

    let go = |target: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    };

    let nav_class = "px-3 py-1 rounded-md border border-gray-300 dark:border-gray-600 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-3 px-4 py-3">
            <p class="text-sm text-gray-600 dark:text-gray-400">
                { summary_text(page, props.page_size, props.count) }
            </p>
            if total > 1 {
                <div class="flex items-center gap-1">
                    <button type="button" class={nav_class} disabled={at_start} onclick={go(1)}>{"«"}</button>
                    <button type="button" class={nav_class} disabled={at_start} onclick={go(page.saturating_sub(1).max(1))}>{"‹"}</button>
                    { for page_window(page, total).into_iter().map(|item| match item {
                        PageItem::Number(n) => {
                            let class = if n == page {
                                "px-3 py-1 rounded-md text-sm bg-blue-600 text-white"
                            } else {
                                nav_class
                            };
                            html! { <button type="button" class={class} onclick={go(n)}>{ n }</button> }
                        }
                        PageItem::Gap => html! { <span class="px-2 text-gray-500">{"…"}</span> },
                    }) }
                    <button type="button" class={nav_class} disabled={at_end} onclick={go((page + 1).min(total))}>{"›"}</button>
                    <button type="button" class={nav_class} disabled={at_end} onclick={go(total)}>{"»"}</button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Number};

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_small_page_counts_show_every_page() {
        assert_eq!(page_window(1, 1), vec![Number(1)]);
        assert_eq!(
            page_window(3, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_gaps_around_the_window() {
        assert_eq!(
            page_window(10, 20),
            vec![
                Number(1),
                Gap,
                Number(8),
                Number(9),
                Number(10),
                Number(11),
                Number(12),
                Gap,
                Number(20)
            ]
        );
    }

    #[test]
    fn test_single_missing_page_is_filled() {
        // window around 5 is 3..=7, so page 2 would be the only hole
        assert_eq!(
            page_window(5, 10),
            vec![
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Gap,
                Number(10)
            ]
        );
        assert_eq!(
            page_window(1, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_nav_disabled_at_boundaries() {
        assert_eq!(nav_disabled(1, 5), (true, false));
        assert_eq!(nav_disabled(5, 5), (false, true));
        assert_eq!(nav_disabled(3, 5), (false, false));
        assert_eq!(nav_disabled(7, 5), (false, true));
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(1, 10, 0), "No results found");
        assert_eq!(summary_text(1, 10, 42), "Showing 1 to 10 of 42 results");
        assert_eq!(summary_text(5, 10, 42), "Showing 41 to 42 of 42 results");
    }
}
