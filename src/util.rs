use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};

/// Center a `size`-sized rectangle inside `area`, clamping to `area` when it
/// does not fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([Constraint::Length(size.width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(size.height)])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 10, 10), Size::new(4, 2), Rect::new(3, 4, 4, 2))]
    #[case(Rect::new(2, 1, 8, 5), Size::new(8, 5), Rect::new(2, 1, 8, 5))]
    #[case(Rect::new(0, 0, 3, 3), Size::new(5, 5), Rect::new(0, 0, 3, 3))]
    #[case(Rect::ZERO, Size::new(4, 2), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
