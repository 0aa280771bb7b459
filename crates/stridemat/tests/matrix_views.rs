//! Integration tests for matrix construction, sub-block views and aliasing.

use stridemat::math::{Matrix, MutableMatrix, Readable2};
use stridemat::MatrixError;

/// `rows × cols` matrix whose entry `(r, c)` is `10 * r + c`.
fn grid(rows: usize, cols: usize) -> Matrix {
    Matrix::new(rows, cols, |r, c| (10 * r + c) as f64).expect("failed to create matrix")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_new_row_major_fill() {
    let mut order = Vec::new();
    let m = Matrix::new(2, 3, |r, c| {
        order.push((r, c));
        (r * 3 + c) as f64
    })
    .unwrap();
    assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.size(), 6);
    assert_eq!(m.get(1, 2).unwrap(), 5.0);
}

#[test]
fn matrix_literal_rows() {
    let m = Matrix::from_row_slices(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.to_rows().unwrap(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
}

#[test]
fn matrix_ragged_rows_fail() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedRows {
            row: 2,
            expected: 2,
            found: 1
        }
    );
    assert!(err.is_invalid_size());
    assert!(MutableMatrix::from_rows(vec![vec![1.0], vec![]]).is_err());
}

#[test]
fn matrix_non_positive_extents_fail() {
    assert_eq!(Matrix::zeros(0, 3).unwrap_err(), MatrixError::InvalidSize(vec![0, 3]));
    assert!(Matrix::ones(2, 0).unwrap_err().is_invalid_size());
    assert!(Matrix::eye(0).unwrap_err().is_invalid_size());
    assert!(MutableMatrix::new(0, 0, |_, _| 1.0).unwrap_err().is_invalid_size());
    assert!(Matrix::from_rows(vec![]).unwrap_err().is_invalid_size());
}

#[test]
fn matrix_factories() {
    assert_eq!(Matrix::ones(2, 2).unwrap().to_rows().unwrap(), vec![vec![1.0; 2]; 2]);
    assert_eq!(Matrix::zeros(1, 3).unwrap().to_rows().unwrap(), vec![vec![0.0; 3]]);
    assert_eq!(
        Matrix::eye(3).unwrap().to_rows().unwrap(),
        vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]]
    );
    assert_eq!(MutableMatrix::eye(2).unwrap(), Matrix::eye(2).unwrap());
    let col = Matrix::column(4).unwrap();
    assert_eq!(col.shape(), (4, 1));
    assert_eq!(Matrix::from_elem(2, 1, 3.0).unwrap().get(1, 0).unwrap(), 3.0);
}

#[test]
fn matrix_get_checks_view_extent() {
    let m = grid(3, 3);
    assert_eq!(
        m.get(3, 0),
        Err(MatrixError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        m.get(0, 4),
        Err(MatrixError::IndexOutOfBounds { index: 4, len: 3 })
    );
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn matrix_sub_block_view() {
    let m = grid(4, 5);
    let block = m.view(1, 3, 1, 2, 5, 1).unwrap();
    assert_eq!(block.shape(), (2, 3));
    assert_eq!(
        block.to_rows().unwrap(),
        vec![vec![12.0, 13.0, 14.0], vec![22.0, 23.0, 24.0]]
    );
    assert_eq!(Readable2::size(&block), 6);
}

#[test]
fn matrix_strided_and_reversed_view() {
    let m = grid(4, 4);
    let v = m.view(3, -1, -2, 0, 4, 3).unwrap();
    assert_eq!(v.to_rows().unwrap(), vec![vec![30.0, 33.0], vec![10.0, 13.0]]);
    assert_eq!(v.row_axis().origin(), 3);
    assert_eq!(v.row_axis().stride(), -2);
    assert_eq!(v.col_axis().stride(), 3);
}

#[test]
fn matrix_view_of_view_composes() {
    let m = grid(6, 6);
    let evens = m.view(0, 6, 2, 0, 6, 2).unwrap(); // rows/cols 0, 2, 4
    let corner = evens.view(1, 3, 1, 2, -1, -1).unwrap(); // rows 2, 4; cols 4, 2, 0
    assert_eq!(
        corner.to_rows().unwrap(),
        vec![vec![24.0, 22.0, 20.0], vec![44.0, 42.0, 40.0]]
    );
}

#[test]
fn matrix_view_selection_errors() {
    let m = grid(3, 4);
    assert!(matches!(
        m.view(0, 3, 0, 0, 4, 1),
        Err(MatrixError::InvalidSelection { stride: 0, .. })
    ));
    assert!(matches!(
        m.view(0, 3, 1, 0, 4, 0),
        Err(MatrixError::InvalidSelection { stride: 0, .. })
    ));
    // exclusive upper bounds: 3 rows and 4 cols are the limits
    assert!(m.view(0, 3, 1, 0, 4, 1).is_ok());
    assert!(m.view(0, 4, 1, 0, 4, 1).is_err());
    assert!(m.view(0, 3, 1, 0, 5, 1).is_err());
}

#[test]
fn matrix_row_and_column_views() {
    let m = grid(3, 3);
    let row = m.view(1, 2, 1, 0, 3, 1).unwrap();
    let col = m.view(0, 3, 1, 2, 3, 1).unwrap();
    assert_eq!(row.to_rows().unwrap(), vec![vec![10.0, 11.0, 12.0]]);
    assert_eq!(col.to_rows().unwrap(), vec![vec![2.0], vec![12.0], vec![22.0]]);
}

// ---------------------------------------------------------------------------
// Write-through and aliasing
// ---------------------------------------------------------------------------

#[test]
fn mutable_matrix_view_writes_reach_parent() {
    let m = MutableMatrix::zeros(3, 3).unwrap();
    let lower_right = m.view(1, 3, 1, 1, 3, 1).unwrap();
    assert_eq!(lower_right.set(1, 0, 4.0).unwrap(), 0.0);
    assert_eq!(m.get(2, 1).unwrap(), 4.0);
    assert_eq!(lower_right.set(1, 0, 5.0).unwrap(), 4.0);
}

#[test]
fn overlapping_matrix_views_alias() {
    let m = MutableMatrix::zeros(4, 4).unwrap();
    let top = m.view(0, 2, 1, 0, 4, 1).unwrap();
    let diagonal_block = m.view(1, 3, 1, 1, 3, 1).unwrap();
    top.set(1, 2, 9.0).unwrap(); // physical (1, 2)
    assert_eq!(diagonal_block.get(0, 1).unwrap(), 9.0);
    diagonal_block.fill(1.0).unwrap();
    assert_eq!(top.to_rows().unwrap()[1], vec![0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn matrix_read_only_view_sees_writes() {
    let m = MutableMatrix::eye(2).unwrap();
    let ro = m.as_read_only();
    m.set(0, 1, 3.0).unwrap();
    assert_eq!(ro.get(0, 1).unwrap(), 3.0);
    let frozen = m.to_matrix().unwrap();
    m.set(0, 1, 4.0).unwrap();
    assert_eq!(frozen.get(0, 1).unwrap(), 3.0);
    assert_eq!(ro.get(0, 1).unwrap(), 4.0);
}

#[test]
fn matrix_set_out_of_view_leaves_parent() {
    let m = MutableMatrix::zeros(3, 3).unwrap();
    let block = m.view(0, 2, 1, 0, 2, 1).unwrap();
    assert!(block.set(2, 0, 1.0).is_err());
    assert_eq!(m, Matrix::zeros(3, 3).unwrap());
}

// ---------------------------------------------------------------------------
// Conversions, equality and display
// ---------------------------------------------------------------------------

#[test]
fn matrix_copy_and_to_mutable() {
    let m = grid(2, 2);
    let copy = m.view(0, 2, 1, 1, 2, 1).unwrap().copy().unwrap();
    assert_eq!(copy.shape(), (2, 1));
    assert_eq!(copy.row_axis().stride(), 1);

    let mutable = m.to_mutable().unwrap();
    mutable.set(0, 0, -1.0).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 0.0);
    assert_ne!(m, mutable);
}

#[test]
fn matrix_try_from_rows() {
    let m: Matrix = vec![vec![1.0, 2.0]].try_into().unwrap();
    assert_eq!(m.shape(), (1, 2));
    let bad: Result<MutableMatrix, _> = vec![vec![1.0], vec![2.0, 3.0]].try_into();
    assert!(bad.is_err());
}

#[test]
fn matrix_display() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
    assert_eq!(m.to_string(), "[[1, 2],\n [3, 4.5]]");
}
