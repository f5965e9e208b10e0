//! Property tests for generated matrices and assembled forests

use forest_fixtures::prelude::*;
use forest_fixtures::properties;
use forest_fixtures::matrix::{read_matrix, write_matrix};
use proptest::prelude::*;

proptest! {
    #[test]
    fn chain_has_expected_entries(n in 1usize..300) {
        let m = LinearChain.generate(n);
        prop_assert_eq!(m.dim(), n);
        prop_assert_eq!(m.nonzero_count(), 2 * (n - 1));
    }

    #[test]
    fn tree_has_expected_entries(depth in 1usize..11) {
        let m = BinaryTree.generate(depth);
        prop_assert_eq!(m.dim(), (1 << depth) - 1);
        prop_assert_eq!(m.nonzero_count(), 2 * ((1 << depth) - 2));
    }

    #[test]
    fn chains_are_symmetric_with_zero_diagonal(n in 0usize..100) {
        prop_assert!(properties::is_valid_adjacency(&LinearChain.generate(n)));
    }

    #[test]
    fn trees_are_symmetric_with_zero_diagonal(depth in 0usize..9) {
        prop_assert!(properties::is_valid_adjacency(&BinaryTree.generate(depth)));
    }

    #[test]
    fn forest_dimension_is_sum_of_components(
        sizes in prop::collection::vec(0usize..40, 0..8)
    ) {
        let forest = assemble(&LinearChain, &sizes);
        prop_assert_eq!(forest.total_nodes(), sizes.iter().sum::<usize>());
        prop_assert_eq!(forest.component_sizes(), &sizes[..]);
    }

    #[test]
    fn forest_blocks_stay_independent(
        sizes in prop::collection::vec(1usize..15, 2..6)
    ) {
        let forest = assemble(&LinearChain, &sizes);
        let m = forest.matrix();

        for k in 0..forest.component_count() {
            for l in 0..forest.component_count() {
                if k == l {
                    continue;
                }
                for i in forest.component_range(k) {
                    for j in forest.component_range(l) {
                        prop_assert_eq!(m.get(i, j), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn tree_forests_are_forests(
        depths in prop::collection::vec(1usize..6, 1..5)
    ) {
        let forest = assemble(&BinaryTree, &depths);
        prop_assert!(properties::is_forest(forest.matrix()));
        prop_assert_eq!(
            properties::component_count(forest.matrix()),
            depths.len()
        );
    }

    #[test]
    fn text_format_round_trips(
        sizes in prop::collection::vec(0usize..20, 0..5)
    ) {
        let matrix = assemble(&LinearChain, &sizes).into_matrix();

        let mut buf = Vec::new();
        write_matrix(&mut buf, &matrix).unwrap();
        let parsed = read_matrix(&buf[..]).unwrap();

        prop_assert_eq!(parsed, matrix);
    }
}

#[test]
fn standard_fixture_files_on_disk() {
    let dir = std::env::temp_dir().join("forest_fixtures_standard_set");
    std::fs::create_dir_all(&dir).unwrap();

    let specs = standard_fixtures();
    let paths = write_fixtures(&specs, &dir).unwrap();
    assert_eq!(paths.len(), 3);

    let dims: Vec<usize> = paths
        .iter()
        .map(|p| read_matrix_file(p).unwrap().dim())
        .collect();
    assert_eq!(dims, vec![797, 110, 1000]);

    for path in &paths {
        let matrix = read_matrix_file(path).unwrap();
        assert!(properties::is_valid_adjacency(&matrix));
        assert!(properties::is_forest(&matrix));
    }

    std::fs::remove_dir_all(&dir).ok();
}
