// file: src/grouping/mod.rs
// description: groups normalized listings into brand/model cards and brand filters
// reference: inventory grid display

use crate::catalog::ImageCatalog;
use crate::models::{BrandFilter, NormalizedListing, VehicleGroup};
use crate::reference::ReferenceData;
use std::collections::HashMap;

/// One group per `(brand, model_name)`, emitted in first-seen order.
pub fn group_listings(listings: &[NormalizedListing], catalog: &ImageCatalog) -> Vec<VehicleGroup> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<VehicleGroup> = Vec::new();

    for listing in listings {
        let key = (listing.brand.as_str(), listing.model_name.as_str());

        let position = *index.entry(key).or_insert_with(|| {
            groups.push(VehicleGroup {
                brand: listing.brand.clone(),
                model_name: listing.model_name.clone(),
                image: catalog.vehicle_image_path(&listing.brand, &listing.model_name),
                brand_logo: catalog.brand_logo_path(&listing.brand),
                total_count: 0,
                lineups: Vec::new(),
                listings: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.total_count += 1;
        if !listing.lineup.is_empty() && !group.lineups.contains(&listing.lineup) {
            group.lineups.push(listing.lineup.clone());
        }
        group.listings.push(listing.clone());
    }

    groups
}

/// Per-brand listing counts in display order. Unknown brands follow the known
/// ones in first-seen order.
pub fn brand_filters(
    listings: &[NormalizedListing],
    catalog: &ImageCatalog,
    reference: &ReferenceData,
) -> Vec<BrandFilter> {
    let mut filters: Vec<BrandFilter> = Vec::new();

    for listing in listings {
        match filters.iter_mut().find(|f| f.brand == listing.brand) {
            Some(filter) => filter.count += 1,
            None => filters.push(BrandFilter {
                brand: listing.brand.clone(),
                logo: catalog.brand_logo_path(&listing.brand),
                count: 1,
            }),
        }
    }

    // stable: ties keep first-seen order
    filters.sort_by_key(|filter| reference.brand_rank(&filter.brand));
    filters
}
