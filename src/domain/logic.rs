// src/domain/logic.rs

use crate::domain::criteria::{FilterCriteria, RoomTypeFilter, SortOrder};
use crate::domain::listing::Listing;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Narrows the collection to the listings that satisfy every active predicate,
/// then orders them. The source slice is never touched; callers get borrows
/// in display order.
///
/// Predicates are a conjunction: favorites-only, free text, room type and the
/// price threshold. Sorting is stable, so ties keep their collection order.
pub fn apply_criteria<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    sort: SortOrder,
    favorites: &BTreeSet<i64>,
) -> Vec<&'a Listing> {
    let query = criteria.query.trim().to_lowercase();
    let max_price = f64::from(criteria.max_price);

    let mut result: Vec<&Listing> = listings
        .iter()
        .filter(|l| !criteria.favorites_only || favorites.contains(&l.id))
        .filter(|l| matches_query(l, &query))
        .filter(|l| matches_room_type(l, &criteria.room_type))
        .filter(|l| l.price_value() <= max_price)
        .collect();

    sort_listings(&mut result, sort);
    result
}

/// `query` must already be lower-cased and trimmed. Empty matches everything.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    [
        listing.name.as_deref(),
        listing.description.as_deref(),
        listing.host_name.as_deref(),
        listing.neighbourhood_cleansed.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(query))
}

pub fn matches_room_type(listing: &Listing, filter: &RoomTypeFilter) -> bool {
    match filter {
        RoomTypeFilter::All => true,
        RoomTypeFilter::Only(wanted) => listing.room_type.as_deref() == Some(wanted.as_str()),
    }
}

pub fn sort_listings(listings: &mut [&Listing], sort: SortOrder) {
    match sort {
        SortOrder::Original => {}
        SortOrder::PriceLow => {
            listings.sort_by(|a, b| cmp_f64(a.price_value(), b.price_value()));
        }
        SortOrder::PriceHigh => {
            listings.sort_by(|a, b| cmp_f64(b.price_value(), a.price_value()));
        }
        SortOrder::Rating => listings.sort_by(|a, b| {
            cmp_f64(b.rating().unwrap_or(0.0), a.rating().unwrap_or(0.0))
        }),
        SortOrder::Beds => {
            listings.sort_by(|a, b| b.beds.unwrap_or(0).cmp(&a.beds.unwrap_or(0)));
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Distinct room types in first-seen order, for the type dropdown.
pub fn distinct_room_types(listings: &[Listing]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for room_type in listings.iter().filter_map(|l| l.room_type.as_deref()) {
        if !room_type.is_empty() && !types.iter().any(|t| t == room_type) {
            types.push(room_type.to_string());
        }
    }
    types
}
