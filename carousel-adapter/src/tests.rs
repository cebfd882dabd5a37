use crate::*;

use alloc::vec;
use alloc::vec::Vec;

use rand::RngCore;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // MMIX LCG step.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst);
    }
}

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort();
    out
}

#[test]
fn presets_match_detail_page_constants() {
    let similar = similar_config();
    let recommended = recommended_config();
    assert_eq!(similar.virtual_total.get(), 20);
    assert_eq!(recommended.virtual_total.get(), 12);
    assert_eq!(similar.breakpoints, recommended.breakpoints);

    for (cfg, narrow_max, wide_max) in [(similar, 9, 6), (recommended, 5, 3)] {
        assert_eq!(cfg.max_page_index(cfg.items_per_page(767)), narrow_max);
        assert_eq!(cfg.max_page_index(cfg.items_per_page(768)), wide_max);
    }
}

#[test]
fn viewport_signal_coalesces_resizes_per_subscription() {
    let mut signal = ViewportSignal::new(1024);
    let a = signal.subscribe();
    let b = signal.subscribe();
    assert_eq!(signal.subscriber_count(), 2);
    assert_eq!(signal.take_resize(&a), None);

    assert!(signal.set_width(500));
    assert!(signal.set_width(640));
    assert!(!signal.set_width(640));
    assert_eq!(signal.take_resize(&a), Some(640));
    assert_eq!(signal.take_resize(&a), None);
    assert_eq!(signal.take_resize(&b), Some(640));

    assert!(signal.unsubscribe(a));
    assert_eq!(signal.subscriber_count(), 1);
    signal.set_width(900);
    assert_eq!(signal.take_resize(&b), Some(900));
    assert_eq!(signal.width(), 900);
}

#[test]
fn unsubscribed_handles_see_nothing() {
    let mut signal = ViewportSignal::new(800);
    let a = signal.subscribe();
    let stale = Subscription(0);
    assert!(signal.unsubscribe(a));
    signal.set_width(300);
    assert_eq!(signal.take_resize(&stale), None);
    assert!(!signal.unsubscribe(stale));
}

#[test]
fn host_mount_applies_current_width() {
    let mut signal = ViewportSignal::new(800);
    let mut page: DetailCarousels<&str> = DetailCarousels::new();
    assert!(!page.is_mounted());

    page.mount(&mut signal);
    assert!(page.is_mounted());
    assert_eq!(page.similar().items_per_page(), 3);
    assert_eq!(page.recommended().max_page_index(), 3);

    page.mount(&mut signal);
    assert_eq!(signal.subscriber_count(), 1);
}

#[test]
fn host_sync_applies_latest_width_once() {
    let mut signal = ViewportSignal::new(1024);
    let mut page: DetailCarousels<&str> = DetailCarousels::new();
    page.mount(&mut signal);
    page.replace_similar(vec!["A", "B", "C", "D", "E"]);
    page.window_mut(Carousel::Similar).go_to_page(6);
    assert_eq!(page.similar().page_index(), 6);

    signal.set_width(900);
    signal.set_width(600);
    signal.set_width(375);
    assert!(page.sync(&mut signal));
    assert!(!page.sync(&mut signal));

    assert_eq!(page.similar().viewport_width(), 375);
    assert_eq!(page.similar().items_per_page(), 2);
    assert_eq!(page.similar().max_page_index(), 9);
    assert_eq!(page.similar().page_index(), 6);
    assert_eq!(page.recommended().max_page_index(), 5);
}

#[test]
fn host_unmount_stops_resize_updates() {
    let mut signal = ViewportSignal::new(1024);
    let mut page: DetailCarousels<&str> = DetailCarousels::new();
    page.mount(&mut signal);
    assert!(page.unmount(&mut signal));
    assert!(!page.unmount(&mut signal));
    assert_eq!(signal.subscriber_count(), 0);

    signal.set_width(320);
    assert!(!page.sync(&mut signal));
    assert_eq!(page.similar().viewport_width(), 1024);
}

#[test]
fn carousels_navigate_independently() {
    let mut page: DetailCarousels<&str> = DetailCarousels::new();
    page.set_viewport_width(800);
    page.replace_similar(vec!["s1", "s2"]);
    page.replace_recommended(vec!["r1"]);

    assert_eq!(page.advance(Carousel::Similar), 1);
    assert_eq!(page.advance(Carousel::Similar), 2);
    assert_eq!(page.retreat(Carousel::Recommended), 3);
    assert_eq!(page.window(Carousel::Similar).page_index(), 2);

    page.replace_recommended(vec!["r2", "r3"]);
    assert_eq!(page.window(Carousel::Recommended).page_index(), 0);
    assert_eq!(page.window(Carousel::Similar).page_index(), 2);

    page.advance(Carousel::Recommended);
    page.reset_pages();
    assert_eq!(page.similar().page_index(), 0);
    assert_eq!(page.recommended().page_index(), 0);

    let keys: Vec<_> = page
        .window(Carousel::Recommended)
        .visible_page()
        .into_iter()
        .map(|it| it.key.into_string())
        .collect();
    assert_eq!(keys, vec!["r2-0-0", "r3-0-1", "r2-0-2"]);
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let original: Vec<u32> = (0..12).collect();

    let mut a = original.clone();
    shuffle(&mut a, &mut Lcg(7));
    let mut b = original.clone();
    shuffle(&mut b, &mut Lcg(7));
    assert_eq!(a, b);
    assert_eq!(sorted(&a), original);

    let moved = (1..8u64).any(|seed| {
        let mut c = original.clone();
        shuffle(&mut c, &mut Lcg(seed));
        c != original
    });
    assert!(moved);

    let mut empty: [u32; 0] = [];
    shuffle(&mut empty, &mut Lcg(1));
    let mut one = [5u32];
    shuffle(&mut one, &mut Lcg(1));
    assert_eq!(one, [5]);
}

#[test]
fn pick_recommended_samples_head_of_each_category() {
    let groups = vec![
        vec!["cafe1", "cafe2", "cafe3", "cafe4"],
        vec!["bakery1"],
        vec![],
        vec!["takeaway1", "takeaway2", "takeaway3", "takeaway4", "takeaway5"],
    ];
    let picked: Vec<&str> = pick_recommended(
        &groups,
        RECOMMENDED_PER_CATEGORY,
        RECOMMENDED_LIMIT,
        &mut Lcg(42),
    );
    assert_eq!(
        sorted(&picked),
        sorted(&[
            "cafe1",
            "cafe2",
            "cafe3",
            "bakery1",
            "takeaway1",
            "takeaway2",
            "takeaway3",
        ])
    );

    let again: Vec<&str> = pick_recommended(
        &groups,
        RECOMMENDED_PER_CATEGORY,
        RECOMMENDED_LIMIT,
        &mut Lcg(42),
    );
    assert_eq!(picked, again);
}

#[test]
fn pick_recommended_truncates_to_limit() {
    let groups: Vec<Vec<u32>> = (0..6).map(|g| (g * 10..g * 10 + 5).collect()).collect();
    let picked: Vec<u32> = pick_recommended(groups, 3, RECOMMENDED_LIMIT, &mut Lcg(3));
    assert_eq!(picked.len(), 15);
    assert!(picked.iter().all(|v| v % 10 < 3));

    let none: Vec<u32> = pick_recommended(vec![vec![1u32, 2]], 0, 15, &mut Lcg(3));
    assert!(none.is_empty());
    assert_eq!(RECOMMENDED_CATEGORIES.len(), 4);
}

#[test]
fn pick_recommended_shuffles_the_category_heads() {
    let groups = vec![vec![1u32, 2, 3, 4], vec![10, 11], vec![20, 21, 22, 23]];
    let picked: Vec<u32> = pick_recommended(&groups, 3, RECOMMENDED_LIMIT, &mut Lcg(9));

    let mut expected = vec![1u32, 2, 3, 10, 11, 20, 21, 22];
    shuffle(&mut expected, &mut Lcg(9));
    assert_eq!(picked, expected);
}
