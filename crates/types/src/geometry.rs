//! Millimetre-based geometry used by layout and rendering.
//!
//! Coordinates follow the page convention of the layout layer: origin at the
//! top-left corner, `y` growing downwards.

const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Places content of `natural` size inside this box without cropping.
    ///
    /// The result keeps the box origin and the content aspect ratio.
    pub fn fit(&self, natural: Size) -> Rect {
        let fitted = natural.fit_within(self.size());
        Rect::new(self.x, self.y, fitted.width, fitted.height)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }

    /// Scales this size uniformly so it fits inside `bounds`.
    ///
    /// The scale factor is `min(W / w, H / h)`, so neither dimension exceeds
    /// its bound and at least one of them touches it. Degenerate sizes on
    /// either side collapse to zero.
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.is_empty() || bounds.is_empty() {
            return Size::zero();
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size {
            width: (self.width * scale).min(bounds.width),
            height: (self.height * scale).min(bounds.height),
        }
    }

    pub fn approx_eq(&self, other: &Size) -> bool {
        (self.width - other.width).abs() < EPSILON && (self.height - other.height).abs() < EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fits(natural: Size, bounds: Size) {
        let fitted = natural.fit_within(bounds);
        assert!(fitted.width <= bounds.width + EPSILON, "{fitted:?} wider than {bounds:?}");
        assert!(fitted.height <= bounds.height + EPSILON, "{fitted:?} taller than {bounds:?}");
        assert!(
            (fitted.aspect_ratio() - natural.aspect_ratio()).abs() < 0.01,
            "aspect ratio changed: {natural:?} -> {fitted:?}"
        );
        let touches_width = (fitted.width - bounds.width).abs() < EPSILON;
        let touches_height = (fitted.height - bounds.height).abs() < EPSILON;
        assert!(touches_width || touches_height, "{fitted:?} does not fill {bounds:?}");
    }

    #[test]
    fn wide_image_in_tall_box_is_width_bound() {
        let fitted = Size::new(400.0, 100.0).fit_within(Size::new(50.0, 30.0));
        assert!(fitted.approx_eq(&Size::new(50.0, 12.5)));
    }

    #[test]
    fn tall_image_in_wide_box_is_height_bound() {
        let fitted = Size::new(100.0, 300.0).fit_within(Size::new(70.0, 30.0));
        assert!(fitted.approx_eq(&Size::new(10.0, 30.0)));
    }

    #[test]
    fn wide_image_in_flat_box_never_overflows() {
        // Scaling by the longer side alone would give 50 x 35 here.
        assert_fits(Size::new(100.0, 70.0), Size::new(50.0, 25.0));
    }

    #[test]
    fn fit_holds_for_a_spread_of_shapes() {
        let naturals = [(1.0, 1.0), (640.0, 480.0), (480.0, 640.0), (1200.0, 90.0), (33.0, 1000.0)];
        let boxes = [(50.0, 30.0), (70.0, 30.0), (40.0, 16.0), (180.0, 90.0), (50.0, 25.0)];
        for (w, h) in naturals {
            for (bw, bh) in boxes {
                assert_fits(Size::new(w, h), Size::new(bw, bh));
            }
        }
    }

    #[test]
    fn degenerate_sizes_collapse() {
        assert_eq!(Size::new(0.0, 10.0).fit_within(Size::new(5.0, 5.0)), Size::zero());
        assert_eq!(Size::new(10.0, 10.0).fit_within(Size::new(0.0, 5.0)), Size::zero());
    }

    #[test]
    fn rect_fit_keeps_origin() {
        let placed = Rect::new(25.0, 87.0, 50.0, 30.0).fit(Size::new(200.0, 200.0));
        assert_eq!((placed.x, placed.y), (25.0, 87.0));
        assert!(placed.size().approx_eq(&Size::new(30.0, 30.0)));
    }
}
