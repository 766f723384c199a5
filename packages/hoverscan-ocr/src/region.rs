/// A pixel rectangle in source-image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Intersects the rectangle with an image of the given size.
    ///
    /// Returns `None` when nothing of the rectangle lies inside the image.
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Option<Rectangle> {
        if self.left >= image_width || self.top >= image_height {
            return None;
        }
        let right = self.left.saturating_add(self.width).min(image_width);
        let bottom = self.top.saturating_add(self.height).min(image_height);
        let width = right - self.left;
        let height = bottom - self.top;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Rectangle::new(self.left, self.top, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let rect = Rectangle::new(10, 20, 30, 40);
        assert_eq!(rect.clamp_to(100, 100), Some(rect));
    }

    #[test]
    fn test_clamp_trims_overhang() {
        let rect = Rectangle::new(90, 95, 30, 40);
        assert_eq!(rect.clamp_to(100, 100), Some(Rectangle::new(90, 95, 10, 5)));
    }

    #[test]
    fn test_clamp_outside_is_none() {
        assert_eq!(Rectangle::new(100, 0, 10, 10).clamp_to(100, 100), None);
        assert_eq!(Rectangle::new(0, 0, 0, 10).clamp_to(100, 100), None);
    }
}
