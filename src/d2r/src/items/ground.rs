//! Ground item ordering

use super::model::{Item, Position};

/// Sort items nearest first
///
/// The sort is stable, so items at the same distance keep their scan order.
pub fn sort_by_distance(items: &mut [Item], origin: Position) {
    items.sort_by(|a, b| {
        a.position
            .distance(&origin)
            .total_cmp(&b.position.distance(&origin))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::model::tests::item_at;
    use crate::items::LocationType;

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.unit_id.0).collect()
    }

    #[test]
    fn test_nearest_first() {
        let mut items = vec![
            item_at(0, 1, LocationType::Ground, 10, 0),
            item_at(0, 2, LocationType::Ground, 1, 1),
            item_at(0, 3, LocationType::Ground, 0, 5),
        ];
        sort_by_distance(&mut items, Position::new(0, 0));
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        // Both are 5.0 away from the origin
        let mut items = vec![
            item_at(0, 10, LocationType::Ground, 3, 4),
            item_at(0, 20, LocationType::Ground, -4, 3),
        ];
        sort_by_distance(&mut items, Position::new(0, 0));
        assert_eq!(ids(&items), vec![10, 20]);

        let mut reversed = vec![items[1].clone(), items[0].clone()];
        sort_by_distance(&mut reversed, Position::new(0, 0));
        assert_eq!(ids(&reversed), vec![20, 10]);
    }

    #[test]
    fn test_origin_is_relative() {
        let mut items = vec![
            item_at(0, 1, LocationType::Ground, 5000, 5000),
            item_at(0, 2, LocationType::Ground, 5100, 5030),
        ];
        sort_by_distance(&mut items, Position::new(5090, 5030));
        assert_eq!(ids(&items), vec![2, 1]);
    }

    #[test]
    fn test_empty() {
        let mut items: Vec<Item> = Vec::new();
        sort_by_distance(&mut items, Position::default());
        assert!(items.is_empty());
    }
}
