//! Axis-aligned rectangle bookkeeping for anything placed on the grid

/// Cell coordinate on the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const DEFAULT: Position = Position { column: 0, row: 0 };

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

/// Extent in cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub columns: i32,
    pub rows: i32,
}

impl Size {
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns <= 0 || self.rows <= 0
    }
}

/// Half-open rectangle `[x, x + width) x [y, y + height)`.
/// An empty rectangle neither intersects nor contains anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            x: position.column,
            y: position.row,
            width: size.columns,
            height: size.rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    // Edges are computed in i64 so rectangles near i32::MAX do not overflow
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }

    pub fn contains_point(&self, position: Position) -> bool {
        if self.is_empty() {
            return false;
        }
        let (col, row) = (position.column as i64, position.row as i64);
        col >= self.x as i64 && col < self.right() && row >= self.y as i64 && row < self.bottom()
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Something that occupies a rectangle on the grid
pub trait Boundable {
    fn position(&self) -> Position;

    fn size(&self) -> Size;

    fn rect(&self) -> Rect {
        Rect::new(self.position(), self.size())
    }

    fn intersects(&self, other: &dyn Boundable) -> bool {
        self.rect().intersects(&other.rect())
    }

    fn contains_position(&self, position: Position) -> bool {
        self.rect().contains_point(position)
    }

    fn contains_boundable(&self, other: &dyn Boundable) -> bool {
        self.rect().contains_rect(&other.rect())
    }
}

pub trait Movable {
    /// Move to `position`. Returns whether anything changed.
    fn move_to(&mut self, position: Position) -> bool;
}

/// [`Boundable`] with no offset whose rectangle is recomputed on every move
/// rather than on every query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultBoundable {
    size: Size,
    position: Position,
    rect: Rect,
}

impl DefaultBoundable {
    pub fn new(size: Size) -> Self {
        Self::with_position(size, Position::DEFAULT)
    }

    pub fn with_position(size: Size, position: Position) -> Self {
        Self {
            size,
            position,
            rect: Rect::new(position, size),
        }
    }
}

impl Boundable for DefaultBoundable {
    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Movable for DefaultBoundable {
    fn move_to(&mut self, position: Position) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        self.rect = Rect::new(position, self.size);
        true
    }
}
