use crate::types::station::Station;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Spatial index over a list of stations, for nearest-station lookups.
#[derive(Debug, Clone)]
pub struct StationLocator {
    rtree: RTree<Station>,
}

// Heap entry, ordered by distance only.
struct StationCandidate<'a> {
    distance_km: OrderedFloat<f64>,
    station: &'a Station,
}
impl PartialEq for StationCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance_km == other.distance_km
    }
}
impl Eq for StationCandidate<'_> {}
impl PartialOrd for StationCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for StationCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_km.cmp(&other.distance_km)
    }
}

impl StationLocator {
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            rtree: RTree::bulk_load(stations),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// Finds up to `n_results` stations within `max_distance_km` of the given
    /// point, closest first, with their great-circle distance in kilometers.
    ///
    /// With `parameter_id` set, only stations reporting that parameter are
    /// considered.
    pub fn query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
        parameter_id: Option<&str>,
    ) -> Vec<(Station, f64)> {
        if n_results == 0 {
            return vec![];
        }

        // The R-tree orders by planar degree distance, which can disagree with
        // Haversine ordering, so look at more candidates than requested.
        let candidate_limit = (n_results * 2).max(20);
        let mut heap: BinaryHeap<StationCandidate<'_>> = BinaryHeap::with_capacity(n_results);

        let candidates = self
            .rtree
            .nearest_neighbor_iter(&[latitude, longitude])
            .filter(|station| parameter_id.map_or(true, |p| station.reports(p)))
            .take(candidate_limit);

        for station in candidates {
            let dist_km = distance(
                HaversineLocation {
                    latitude,
                    longitude,
                },
                HaversineLocation {
                    latitude: station.location.latitude,
                    longitude: station.location.longitude,
                },
                Units::Kilometers,
            );
            if dist_km > max_distance_km {
                continue;
            }

            let candidate = StationCandidate {
                distance_km: OrderedFloat(dist_km),
                station,
            };
            if heap.len() < n_results {
                heap.push(candidate);
            } else if let Some(worst) = heap.peek() {
                if candidate.distance_km < worst.distance_km {
                    heap.pop();
                    heap.push(candidate);
                }
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| (c.station.to_owned(), c.distance_km.into_inner()))
            .collect()
    }
}
