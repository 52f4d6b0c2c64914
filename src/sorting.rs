use crate::models::GolfPackage;

/// Price ordering of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Price: Low to High",
            SortOrder::Descending => "Price: High to Low",
        }
    }
}

/// Sort packages by minimum price. The sort is stable: packages with equal
/// prices keep the order the backend returned them in.
pub fn sort_by_price(packages: &mut [GolfPackage], order: SortOrder) {
    match order {
        SortOrder::Ascending => packages.sort_by_key(|p| p.price.min()),
        SortOrder::Descending => packages.sort_by(|a, b| b.price.min().cmp(&a.price.min())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PartySize, Price};

    fn package(id: u32, price: Price) -> GolfPackage {
        GolfPackage {
            id,
            name: format!("Package {}", id),
            location: "Arizona".to_string(),
            price,
            party_size: PartySize::Any,
            website: String::new(),
            image_url: String::new(),
            description: String::new(),
            number_of_rounds: 2,
            number_of_nights: 2,
            perks: vec![],
            courses: vec![],
        }
    }

    fn ids(packages: &[GolfPackage]) -> Vec<u32> {
        packages.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_sorts_on_range_min_and_flat_price() {
        let mut packages = vec![
            package(1, Price::Range { min: 900, max: 1500 }),
            package(2, Price::Flat(400)),
            package(3, Price::Range { min: 650, max: 700 }),
        ];
        sort_by_price(&mut packages, SortOrder::Ascending);
        assert_eq!(ids(&packages), vec![2, 3, 1]);

        sort_by_price(&mut packages, SortOrder::Descending);
        assert_eq!(ids(&packages), vec![1, 3, 2]);
    }

    #[test]
    fn test_ties_keep_backend_order() {
        let mut packages = vec![
            package(10, Price::Flat(500)),
            package(11, Price::Range { min: 500, max: 900 }),
            package(12, Price::Flat(300)),
            package(13, Price::Flat(500)),
        ];
        sort_by_price(&mut packages, SortOrder::Ascending);
        assert_eq!(ids(&packages), vec![12, 10, 11, 13]);

        let mut packages = vec![
            package(10, Price::Flat(500)),
            package(11, Price::Flat(500)),
            package(12, Price::Flat(300)),
        ];
        sort_by_price(&mut packages, SortOrder::Descending);
        assert_eq!(ids(&packages), vec![10, 11, 12]);
    }

    #[test]
    fn test_repeated_sort_is_idempotent() {
        let mut packages = vec![
            package(1, Price::Flat(800)),
            package(2, Price::Flat(800)),
            package(3, Price::Flat(200)),
        ];
        sort_by_price(&mut packages, SortOrder::Descending);
        let once = ids(&packages);
        sort_by_price(&mut packages, SortOrder::Descending);
        assert_eq!(ids(&packages), once);
    }

    #[test]
    fn test_reversed_order_reverses_distinct_prices() {
        let prices = [1200, 350, 999, 60, 1875];
        let mut asc: Vec<_> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| package(i as u32, Price::Flat(*p)))
            .collect();
        let mut desc = asc.clone();

        sort_by_price(&mut asc, SortOrder::Ascending);
        sort_by_price(&mut desc, SortOrder::Descending);

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_toggle_is_two_state() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggled().toggled(), SortOrder::Ascending);
    }
}
