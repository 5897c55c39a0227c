//! Property-style invariants over randomly generated grids.

use proptest::prelude::*;

use tabl_model::{Table, TableConfig};

/// A rectangular grid: a header of generated names plus `height` body rows
/// of short lowercase cells (duplicates and empties included on purpose).
fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..5, 1usize..8).prop_flat_map(|(width, height)| {
        let header = (0..width)
            .map(|i| format!("col{i}"))
            .collect::<Vec<String>>();
        prop::collection::vec(
            prop::collection::vec("[a-c]{0,2}", width..=width),
            height..=height,
        )
        .prop_map(move |body| {
            let mut grid = vec![header.clone()];
            grid.extend(body);
            grid
        })
    })
}

proptest! {
    #[test]
    fn sort_is_idempotent(grid in grid_strategy()) {
        let mut once = Table::new(grid, TableConfig::new()).expect("table");
        let mut twice = once.clone();
        once.sort(Some("col0"), false).expect("sort");
        twice.sort(Some("col0"), false).expect("sort");
        twice.sort(Some("col0"), false).expect("sort again");
        prop_assert_eq!(once.raw_rows(), twice.raw_rows());
    }

    #[test]
    fn sort_is_stable(keys in prop::collection::vec("[a-c]", 1..10)) {
        // Tag each row with its original position; after sorting, rows
        // with equal keys must keep their original relative order.
        let mut grid = vec![vec!["k".to_string(), "tag".to_string()]];
        for (i, key) in keys.iter().enumerate() {
            grid.push(vec![key.clone(), i.to_string()]);
        }
        let mut table = Table::new(grid, TableConfig::new()).expect("table");
        table.sort(Some("k"), false).expect("sort");
        for pair in table.raw_rows().windows(2) {
            prop_assert!(pair[0][0] <= pair[1][0]);
            if pair[0][0] == pair[1][0] {
                let a: usize = pair[0][1].parse().expect("tag");
                let b: usize = pair[1][1].parse().expect("tag");
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn reverse_sort_of_unique_keys_is_the_exact_reverse(height in 1usize..8) {
        // Build unique keys directly so the reverse comparison is total.
        let mut grid = vec![vec!["k".to_string()]];
        for i in 0..height {
            grid.push(vec![format!("v{i}")]);
        }
        let mut asc = Table::new(grid, TableConfig::new()).expect("table");
        let mut desc = asc.clone();
        asc.sort(Some("k"), false).expect("sort asc");
        desc.sort(Some("k"), true).expect("sort desc");
        let mut reversed = desc.raw_rows().to_vec();
        reversed.reverse();
        prop_assert_eq!(asc.raw_rows(), &reversed[..]);
    }

    #[test]
    fn filter_output_is_an_order_preserving_subset(grid in grid_strategy()) {
        let table = Table::new(grid, TableConfig::new()).expect("table");
        let filtered = table.filter(|row| row.cells()[0].contains('a'));
        prop_assert!(filtered.len() <= table.len());
        for row in filtered.raw_rows() {
            prop_assert!(row[0].contains('a'));
        }
        // Order preservation: the kept rows appear in the parent in the
        // same sequence.
        let mut cursor = 0usize;
        for row in filtered.raw_rows() {
            let found = table.raw_rows()[cursor..]
                .iter()
                .position(|candidate| candidate == row);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn facets_partition_the_non_empty_rows(grid in grid_strategy()) {
        let table = Table::new(grid, TableConfig::new()).expect("table");
        let facets = table.facet_by("col0").expect("facets");
        let expected: usize = table
            .raw_rows()
            .iter()
            .filter(|row| !row[0].is_empty())
            .count();
        let total: usize = facets.iter().map(Table::len).sum();
        prop_assert_eq!(total, expected);
        // Each facet holds exactly the rows with its value, and the facet
        // values ascend.
        let values: Vec<&str> = facets.iter().filter_map(|t| t.faceted_on()).collect();
        let mut sorted_values = values.clone();
        sorted_values.sort_unstable();
        prop_assert_eq!(&values, &sorted_values);
        for facet in &facets {
            let value = facet.faceted_on().expect("facet value");
            for row in facet.raw_rows() {
                prop_assert_eq!(row[0].as_str(), value);
            }
        }
    }

    #[test]
    fn transpose_is_an_involution(grid in grid_strategy()) {
        let table = Table::new(grid.clone(), TableConfig::new()).expect("table");
        let back = table
            .transpose()
            .expect("transpose")
            .transpose()
            .expect("transpose back");
        let mut restored = vec![back.default_columns().to_vec()];
        restored.extend(back.raw_rows().iter().cloned());
        prop_assert_eq!(restored, grid);
    }
}
