/// Archive adapters giving read access to shaded jars
mod zip_archive;

pub use zip_archive::ZipBundleArchive;
