//! Axis-aligned rectangles and the two screen helpers every entity uses.
//!
//! World coordinates grow right and down, with the origin at the top-left
//! corner of the screen.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// A `w`×`h` rectangle centred on `center`.
    pub fn from_center(center: (f32, f32), w: f32, h: f32) -> Self {
        Rect {
            x: center.0 - w / 2.0,
            y: center.1 - h / 2.0,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, center: (f32, f32)) {
        self.x = center.0 - self.w / 2.0;
        self.y = center.1 - self.h / 2.0;
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Whether `obj` lies fully inside `[0, width] × [0, height]`, per axis.
///
/// Returns `(horizontal, vertical)`; an entity is off-screen as soon as
/// either component is false.
pub fn check_bound(obj: &Rect, width: f32, height: f32) -> (bool, bool) {
    let horizontal = obj.left() >= 0.0 && obj.right() <= width;
    let vertical = obj.top() >= 0.0 && obj.bottom() <= height;
    (horizontal, vertical)
}

/// Shorthand for `check_bound(..) == (true, true)`.
pub fn on_screen(obj: &Rect, width: f32, height: f32) -> bool {
    check_bound(obj, width, height) == (true, true)
}

/// Unit vector from the centre of `org` towards the centre of `dst`.
///
/// Coincident centres have no direction; they aim straight down.
pub fn calc_orientation(org: &Rect, dst: &Rect) -> (f32, f32) {
    let (ox, oy) = org.center();
    let (dx, dy) = dst.center();
    let (x_diff, y_diff) = (dx - ox, dy - oy);
    let norm = (x_diff * x_diff + y_diff * y_diff).sqrt();
    if norm < f32::EPSILON {
        return (0.0, 1.0);
    }
    (x_diff / norm, y_diff / norm)
}
