use super::{Grid, GridError, Point};

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
    /// Cells are absolute grid coordinates rather than offsets to centre.
    pub anchored: bool,
}

impl Pattern {
    /// `(width, height)` of the pattern's bounding box.
    pub fn extent(&self) -> (i64, i64) {
        let w = self.cells.iter().map(|c| c.0).max().unwrap_or(-1) + 1;
        let h = self.cells.iter().map(|c| c.1).max().unwrap_or(-1) + 1;
        (w, h)
    }

    pub fn points(&self, origin: Point) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(move |c| origin + Point::from(*c))
    }

    /// Where the pattern lands in `grid`: the grid origin when anchored,
    /// otherwise centred.
    pub fn origin_in(&self, grid: &Grid) -> Point {
        if self.anchored {
            return Point { x: 0, y: 0 };
        }
        let (w, h) = self.extent();
        Point {
            x: (grid.width() as i64 - w) / 2,
            y: (grid.height() as i64 - h) / 2,
        }
    }

    pub fn seed(&self, grid: &mut Grid) -> Result<usize, GridError> {
        let origin = self.origin_in(grid);
        grid.seed(self.points(origin))
    }
}

/// The two clusters the classic 500x400 demo starts from.
pub const REFERENCE: Pattern = Pattern {
    name: "reference",
    anchored: true,
    cells: &[
        (198, 198),
        (200, 198),
        (202, 198),
        (199, 199),
        (200, 199),
        (201, 199),
        (199, 203),
        (200, 203),
        (201, 203),
        (199, 207),
        (200, 207),
        (201, 207),
        (300, 200),
        (301, 200),
        (302, 200),
        (304, 200),
        (305, 200),
        (306, 200),
        (300, 201),
        (306, 201),
        (306, 202),
        (300, 203),
        (306, 203),
        (300, 204),
        (301, 204),
        (302, 204),
        (303, 204),
        (304, 204),
        (305, 204),
        (306, 204),
    ],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    anchored: false,
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    anchored: false,
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    anchored: false,
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    anchored: false,
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    anchored: false,
    cells: &[
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

pub const PATTERNS: &[Pattern] = &[REFERENCE, BLOCK, BLINKER, GLIDER, R_PENTOMINO, PULSAR];

pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}
