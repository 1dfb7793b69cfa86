//! JSON snapshots of a generated catalog.
//!
//! A snapshot stores the records in their consumer-facing camelCase shape
//! together with the generation seed, so a loaded catalog can still be
//! traced back to (and regenerated from) the seed that produced it.

use super::Catalog;
use crate::error::{CatalogError, Result};
use ecoscan_model::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    format_version: u32,
    seed: Option<u64>,
    products: &'a [Product],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOwned {
    format_version: u32,
    #[serde(default)]
    seed: Option<u64>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<()> {
        let snapshot = SnapshotRef {
            format_version: SNAPSHOT_FORMAT_VERSION,
            seed: self.seed(),
            products: self.products(),
        };
        serde_json::to_writer(writer, &snapshot)?;
        Ok(())
    }

    /// Load a snapshot, rejecting unknown format versions and duplicate ids.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: SnapshotOwned = serde_json::from_reader(reader)?;
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(CatalogError::InvalidSnapshot(format!(
                "unsupported format version {}",
                snapshot.format_version
            )));
        }

        let mut seen = HashSet::with_capacity(snapshot.products.len());
        if let Some(duplicate) = snapshot
            .products
            .iter()
            .find(|product| !seen.insert(product.id))
        {
            return Err(CatalogError::InvalidSnapshot(format!(
                "duplicate product id {}",
                duplicate.id
            )));
        }

        Ok(Catalog::from_products(snapshot.products).with_seed(snapshot.seed))
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_json_writer(&mut writer)?;
        writer.flush()?;
        info!(
            path = %path.display(),
            size = self.len(),
            seed = ?self.seed(),
            "Wrote catalog snapshot"
        );
        Ok(())
    }

    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            size = catalog.len(),
            seed = ?catalog.seed(),
            "Loaded catalog snapshot"
        );
        Ok(catalog)
    }
}
