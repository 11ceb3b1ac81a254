/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Cells of the 3x3 block around `center` that fall inside `size`, row by row, without `center` itself.
pub fn surrounding(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, column) = center;
    let last_row = size.0.saturating_sub(1);
    let last_column = size.1.saturating_sub(1);

    let rows = row.saturating_sub(1)..=row.saturating_add(1).min(last_row);
    let columns = column.saturating_sub(1)..=column.saturating_add(1).min(last_column);

    rows.flat_map(move |r| columns.clone().map(move |c| (r, c)))
        .filter(move |&coords| coords != center)
}
