use data_loader::ListingSet;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/listings.csv");

    println!("Loading listings from {}...\n", path.display());

    let start = Instant::now();
    let set = ListingSet::load_from_file(path)
        .expect("Failed to load listings");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listings: {}", set.len());
    println!("Districts: {}", set.districts().len());
    println!("\nPerformance: {:.0} listings/second",
             set.len() as f64 / elapsed.as_secs_f64());
}
