use missionctl::ui::LayoutManager;
use ratatui::layout::Rect;

fn screen() -> Rect {
    Rect::new(0, 0, 120, 40)
}

#[test]
fn test_main_layout_has_header_body_status() {
    let areas = LayoutManager::main_layout(screen());
    assert_eq!(areas.len(), 3);
    assert_eq!(areas[0].height, 1);
    assert_eq!(areas[2].height, 1);
    assert_eq!(areas[0].height + areas[1].height + areas[2].height, 40);
}

#[test]
fn test_body_layout_splits_sidebar_and_content() {
    let areas = LayoutManager::body_layout(screen(), 24);
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].width, 24);
    assert_eq!(areas[0].width + areas[1].width, 120);
}

#[test]
fn test_body_layout_caps_sidebar_at_a_third() {
    let narrow = Rect::new(0, 0, 45, 40);
    let areas = LayoutManager::body_layout(narrow, 30);
    assert_eq!(areas[0].width, 15);
}

#[test]
fn test_dashboard_layout_has_four_cells() {
    let areas = LayoutManager::dashboard_layout(screen());
    assert_eq!(areas.len(), 4);
    // Top row cells share a y coordinate; documents sit below
    assert_eq!(areas[0].y, areas[1].y);
    assert_eq!(areas[1].y, areas[2].y);
    assert!(areas[3].y > areas[0].y);
}

#[test]
fn test_board_columns_are_six_and_cover_the_width() {
    let columns = LayoutManager::board_columns(screen());
    assert_eq!(columns.len(), 6);
    let total: u16 = columns.iter().map(|c| c.width).sum();
    assert_eq!(total, 120);
    // Columns are contiguous, left to right
    for pair in columns.windows(2) {
        assert_eq!(pair[0].x + pair[0].width, pair[1].x);
    }
}

#[test]
fn test_palette_rect_sits_inside_the_area() {
    let area = screen();
    let palette = LayoutManager::palette_rect(area);
    assert!(palette.width <= 64);
    assert!(palette.x >= area.x && palette.x + palette.width <= area.x + area.width);
    assert!(palette.y >= area.y && palette.y + palette.height <= area.y + area.height);
}

#[test]
fn test_detail_rect_docks_to_the_right_edge() {
    let area = screen();
    let detail = LayoutManager::detail_rect(area);
    assert_eq!(detail.x + detail.width, area.x + area.width);
    assert_eq!(detail.height, area.height);
    assert!(detail.width <= 72);
}

#[test]
fn test_centered_rect_is_centered() {
    let area = screen();
    let rect = LayoutManager::centered_rect(50, 50, area);
    assert_eq!(rect.width, 60);
    assert_eq!(rect.height, 20);
    assert_eq!(rect.x, 30);
    assert_eq!(rect.y, 10);
}

#[test]
fn test_layouts_survive_tiny_terminals() {
    let tiny = Rect::new(0, 0, 10, 3);
    // None of these should panic
    LayoutManager::main_layout(tiny);
    LayoutManager::board_columns(tiny);
    LayoutManager::palette_rect(tiny);
    LayoutManager::detail_rect(tiny);
    LayoutManager::centered_rect(60, 50, tiny);
}
