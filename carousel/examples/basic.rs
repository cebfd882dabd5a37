// Example: paging five records through a 20-slot carousel, then crossing the breakpoint.
use carousel::{Window, WindowConfig};

fn main() {
    let Ok(config) = WindowConfig::try_new(20) else {
        return;
    };
    let mut w = Window::with_records(config, vec!["A", "B", "C", "D", "E"]).with_viewport_width(800);
    println!(
        "per_page={} max_page_index={}",
        w.items_per_page(),
        w.max_page_index()
    );

    for _ in 0..w.page_count() {
        let keys: Vec<String> = w.visible_page().iter().map(|it| it.key.to_string()).collect();
        println!("page {}: {:?}", w.page_index(), keys);
        w.advance();
    }

    // Shrinking below 768px switches to two items per page.
    w.go_to_page(6);
    w.set_viewport_width(500);
    println!(
        "after resize: per_page={} page_index={} max_page_index={}",
        w.items_per_page(),
        w.page_index(),
        w.max_page_index()
    );
}
