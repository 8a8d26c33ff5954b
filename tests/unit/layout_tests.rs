/*!
 * Tests for page layout and pagination math
 */

use hangulbook::app_config::{PageConfig, PageSize};
use hangulbook::render::layout::{
    self, PageGeometry,
};

fn geometry(page_size: PageSize) -> PageGeometry {
    let mut page = PageConfig::default();
    page.page_size = page_size;
    PageGeometry::from_config(&page)
}

/// Test that the header sits above the content area
#[test]
fn test_geometry_headerAboveContent_shouldHold() {
    let geometry = geometry(PageSize::Letter);
    assert!(geometry.header_y() > geometry.content_top());
    assert!(geometry.content_top() > geometry.bottom_limit());
}

/// Test that A4 is taller and narrower than Letter
#[test]
fn test_geometry_withA4_shouldDifferFromLetter() {
    let letter = geometry(PageSize::Letter);
    let a4 = geometry(PageSize::A4);
    assert!(a4.height_pt > letter.height_pt);
    assert!(a4.width_pt < letter.width_pt);
}

/// Test the ceil(N/K) pagination property over a grid of inputs
#[test]
fn test_content_page_count_withGridOfInputs_shouldMatchCeil() {
    for capacity in 1..=6 {
        for sentences in 0..=30 {
            let pages = layout::content_page_count(sentences, capacity);
            let expected = (sentences + capacity - 1) / capacity;
            assert_eq!(pages, expected, "N={sentences} K={capacity}");
        }
    }
}

/// Test that capacity and block height stay consistent
#[test]
fn test_practice_capacity_shouldFillWithinUsableHeight() {
    let geometry = geometry(PageSize::Letter);
    for lines in 1..=8 {
        let capacity = layout::practice_capacity(&geometry, lines);
        let used = capacity as f32 * layout::practice_block_height(&geometry, lines);
        let usable = geometry.content_top() - geometry.bottom_limit();
        assert!(capacity >= 1);
        if capacity > 1 {
            assert!(used <= usable, "lines={lines}: {used} > {usable}");
        }
    }
}

/// Test duplex padding over a range of page counts
#[test]
fn test_padded_page_count_shouldAlwaysBeEvenWhenEnabled() {
    for pages in 1..=20 {
        assert_eq!(layout::padded_page_count(pages, true) % 2, 0);
        assert_eq!(layout::padded_page_count(pages, false), pages);
    }
}
