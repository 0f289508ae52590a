//! Pattern 5: Dependency Inversion
//!
//! "The most flexible systems are those in which source code dependencies
//! refer only to abstractions, not to concretions."
//!
//! A thumbnail service that reads pictures from S3 starts out coupled to the
//! concrete `S3Folder`. The indirection is introduced two ways:
//! 1. trait objects (`ThumbnailService` borrows a `&dyn Folder`)
//! 2. generic bounds (`GenericThumbnailService<F: Folder>`)
//!
//! Same performance vs dynamism tradeoff as in the substitution lesson.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub page: u32,
    pub source: String,
}

fn render(location: &str, pages: u32) -> Vec<Thumbnail> {
    (1..=pages)
        .map(|page| Thumbnail {
            page,
            source: location.to_string(),
        })
        .collect()
}

// ============================================
// 0. The Coupled Version
// ============================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Folder {
    bucket: String,
    pages: u32,
}

impl S3Folder {
    pub fn new(bucket: impl Into<String>, pages: u32) -> Self {
        S3Folder {
            bucket: bucket.into(),
            pages,
        }
    }
}

impl Default for S3Folder {
    fn default() -> Self {
        S3Folder::new("s3://thumbnails", 1)
    }
}

/// Only works with S3; swapping storage means editing this type.
pub struct ThumbnailServiceConcrete {
    input_folder: S3Folder,
}

impl ThumbnailServiceConcrete {
    pub fn new(input_folder: S3Folder) -> Self {
        ThumbnailServiceConcrete { input_folder }
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        render(&self.input_folder.bucket, self.input_folder.pages)
    }
}

// ============================================
// 1. The Abstraction
// ============================================

pub trait Folder {
    fn pages(&self) -> u32;
    fn location(&self) -> &str;
}

impl Folder for S3Folder {
    fn pages(&self) -> u32 {
        self.pages
    }

    fn location(&self) -> &str {
        &self.bucket
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFolder {
    path: String,
    pages: u32,
}

impl LocalFolder {
    pub fn new(path: impl Into<String>, pages: u32) -> Self {
        LocalFolder {
            path: path.into(),
            pages,
        }
    }
}

impl Folder for LocalFolder {
    fn pages(&self) -> u32 {
        self.pages
    }

    fn location(&self) -> &str {
        &self.path
    }
}

// ============================================
// 2. Trait Object Solution
// ============================================

pub struct ThumbnailService<'a> {
    input_folder: &'a dyn Folder,
}

impl<'a> ThumbnailService<'a> {
    pub fn new(input_folder: &'a dyn Folder) -> Self {
        ThumbnailService { input_folder }
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        render(self.input_folder.location(), self.input_folder.pages())
    }
}

// ============================================
// 3. Generic Bound Solution
// ============================================

pub struct GenericThumbnailService<F: Folder> {
    input_folder: F,
}

impl<F: Folder> GenericThumbnailService<F> {
    pub fn new(input_folder: F) -> Self {
        GenericThumbnailService { input_folder }
    }

    pub fn folder(&self) -> &F {
        &self.input_folder
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        render(self.input_folder.location(), self.input_folder.pages())
    }
}
