//! Pattern 5: Dependency Inversion
//! Example: a thumbnail service that depends on Folder, not on S3
//!
//! Run with: cargo run --example p5_dependency_inversion

use solid_principles::inversion::{
    Folder, GenericThumbnailService, LocalFolder, S3Folder, ThumbnailService,
    ThumbnailServiceConcrete,
};

fn main() {
    println!("=== Dependency Inversion Demo ===\n");

    // (0) coupled to the concrete storage
    let coupled = ThumbnailServiceConcrete::new(S3Folder::default());
    println!("coupled: {:?}", coupled.thumbnails());

    // (1) trait objects: pick the storage at runtime
    let s3 = S3Folder::new("s3://holiday", 2);
    let local = LocalFolder::new("./holiday", 3);
    let folders: [&dyn Folder; 2] = [&s3, &local];
    for folder in folders {
        let service = ThumbnailService::new(folder);
        println!("{}: {} thumbnails", folder.location(), service.thumbnails().len());
    }

    // (2) generic bounds: storage fixed at compile time
    let generic = GenericThumbnailService::new(local.clone());
    println!(
        "generic over {}: {:?}",
        generic.folder().location(),
        generic.thumbnails()
    );

    println!("\n=== Key Points ===");
    println!("- Depend on the Folder abstraction, not on S3Folder");
    println!("- &dyn Folder: flexible; F: Folder: monomorphised");
}
