// Example: a detail page host with both carousels, a resize burst and a seeded recommendation.
use carousel::RecordKey;
use carousel_adapter::{
    Carousel, DetailCarousels, RECOMMENDED_CATEGORIES, RECOMMENDED_LIMIT,
    RECOMMENDED_PER_CATEGORY, ViewportSignal, pick_recommended,
};
use rand::RngCore;

#[derive(Clone, Debug)]
struct Place {
    place_id: String,
    name: String,
}

impl RecordKey for Place {
    fn record_key(&self) -> &str {
        &self.place_id
    }
}

struct SplitMix64(u64);

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst);
    }
}

fn place(id: &str, name: &str) -> Place {
    Place {
        place_id: id.to_string(),
        name: name.to_string(),
    }
}

fn print_page(page: &DetailCarousels<Place>, which: Carousel) {
    let w = page.window(which);
    let names: Vec<String> = w
        .visible_page()
        .iter()
        .map(|it| format!("{} ({})", it.record.name, it.key))
        .collect();
    println!(
        "{which:?} page {}/{}: {names:?}",
        w.page_index(),
        w.max_page_index()
    );
}

fn main() {
    let mut viewport = ViewportSignal::new(1280);
    let mut page = DetailCarousels::<Place>::new();
    page.mount(&mut viewport);

    // Fetch completion for the similar carousel.
    page.replace_similar(vec![
        place("p1", "Noodle Bar"),
        place("p2", "Dumpling House"),
        place("p3", "Tea Room"),
    ]);

    // One result list per category, in request order.
    let groups: Vec<Vec<Place>> = RECOMMENDED_CATEGORIES
        .iter()
        .map(|category| {
            (1..=4)
                .map(|i| place(&format!("{category}-{i}"), &format!("{category} #{i}")))
                .collect()
        })
        .collect();
    let recommended: Vec<Place> = pick_recommended(
        &groups,
        RECOMMENDED_PER_CATEGORY,
        RECOMMENDED_LIMIT,
        &mut SplitMix64(2024),
    );
    page.replace_recommended(recommended);

    print_page(&page, Carousel::Similar);
    page.advance(Carousel::Similar);
    print_page(&page, Carousel::Similar);
    print_page(&page, Carousel::Recommended);

    // A burst of resize events collapses into one update.
    for width in [1100, 900, 700, 390] {
        viewport.set_width(width);
    }
    println!("synced={}", page.sync(&mut viewport));
    print_page(&page, Carousel::Similar);
    page.retreat(Carousel::Recommended);
    print_page(&page, Carousel::Recommended);

    page.unmount(&mut viewport);
}
