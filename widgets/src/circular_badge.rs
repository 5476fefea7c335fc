use std::rc::Rc;

use cbadge_core::prelude::*;

use crate::attrs::{BadgeAttrs, ColorRef, Dimension};

const DEFAULT_BG_RADIUS: f32 = 50.; // dp
const DEFAULT_BG_COLOR: (ColorId, Color) = (ColorId::BLACK, Color::BLACK);
const DEFAULT_STROKE_WIDTH: f32 = 0.; // dp
const DEFAULT_STROKE_COLOR: (ColorId, Color) = (ColorId::BLACK, Color::BLACK);
const DEFAULT_STROKE_PADDING: f32 = 0.; // dp
const DEFAULT_ICON_COLOR: (ColorId, Color) = (ColorId::WHITE, Color::WHITE);
const DEFAULT_ICON_PADDING: f32 = 10.; // dp
const DEFAULT_ICON: IconId = IconId::SMILE;

/// A circular badge: a filled disc, an optional stroke ring around it, and an
/// icon tinted with a single color drawn over them.
///
/// Lengths are stored in device pixels and exposed in dp through the
/// accessors. Changing a length that affects the size asks the host for a new
/// layout and paint, changing a color, the icon or an icon padding only asks
/// for a new paint.
///
/// # Example
///
/// ```
/// use cbadge_core::test_helper::TestHost;
/// use cbadge_widgets::prelude::*;
///
/// let host = TestHost::new(2.);
/// let mut badge = CircularBadge::new(host);
/// badge.set_stroke_width(2.);
/// badge.set_stroke_color(Color::RED);
///
/// let size = badge.measure(MeasureSpec::unspecified(), MeasureSpec::at_most(150.));
/// assert_eq!(size, Size::new(208., 150.));
/// ```
pub struct CircularBadge {
  host: Rc<dyn ViewHost>,
  circle_radius: f32,
  circle_color: Color,
  stroke_width: f32,
  stroke_color: Color,
  stroke_padding: f32,
  icon: IconId,
  icon_color: Color,
  icon_padding: EdgeInsets,
}

impl CircularBadge {
  /// Create a badge with the default style.
  pub fn new(host: Rc<dyn ViewHost>) -> Self { Self::with_attrs(host, &BadgeAttrs::default()) }

  /// Create a badge, the attributes absent from `attrs` take their defaults.
  pub fn with_attrs(host: Rc<dyn ViewHost>, attrs: &BadgeAttrs) -> Self {
    let density = host.density();
    let resources = host.resources();
    let px = |dim: Option<Dimension>, default_dp: f32| {
      dim.map_or_else(|| density.dp_to_px(default_dp), |d| d.to_px(density))
    };
    let color = |color: &Option<ColorRef>, (default_id, fallback): (ColorId, Color)| {
      color
        .as_ref()
        .and_then(|c| c.resolve(resources))
        .or_else(|| resources.color(&default_id))
        .unwrap_or(fallback)
    };

    let icon_padding = EdgeInsets::new(
      px(attrs.icon_top_padding, DEFAULT_ICON_PADDING),
      px(attrs.icon_right_padding, DEFAULT_ICON_PADDING),
      px(attrs.icon_bottom_padding, DEFAULT_ICON_PADDING),
      px(attrs.icon_left_padding, DEFAULT_ICON_PADDING),
    );
    let circle_color = color(&attrs.bg_color, DEFAULT_BG_COLOR);
    let stroke_color = color(&attrs.stroke_color, DEFAULT_STROKE_COLOR);
    let icon_color = color(&attrs.icon_color, DEFAULT_ICON_COLOR);

    Self {
      circle_radius: px(attrs.bg_radius, DEFAULT_BG_RADIUS),
      circle_color,
      stroke_width: px(attrs.stroke_width, DEFAULT_STROKE_WIDTH),
      stroke_color,
      stroke_padding: px(attrs.stroke_padding, DEFAULT_STROKE_PADDING),
      icon: attrs.icon_drawable.clone().unwrap_or(DEFAULT_ICON),
      icon_color,
      icon_padding,
      host,
    }
  }

  /// The size the badge wants on both axes: the disc plus the stroke ring and
  /// its gap.
  pub fn desired_extent(&self) -> f32 {
    self.circle_radius * 2. + (self.stroke_width + self.stroke_padding) * 2.
  }

  /// The radius of the center line of the stroke ring.
  fn stroke_radius(&self) -> f32 {
    self.circle_radius + self.stroke_padding + self.stroke_width / 2.
  }

  fn density(&self) -> Density { self.host.density() }

  fn dp_to_px(&self, dp: f32) -> f32 { self.density().dp_to_px(dp) }

  fn px_to_dp(&self, px: f32) -> f32 { self.density().px_to_dp(px) }

  fn relayout(&self) {
    self.host.request_layout();
    self.host.invalidate();
  }

  /// Resolve `color` and store it in the slot `field` selects, a color
  /// resource that can't be resolved keeps the current color.
  fn update_color(&mut self, color: ColorRef, field: fn(&mut Self) -> &mut Color) {
    match color.resolve(self.host.resources()) {
      Some(c) => {
        *field(self) = c;
        self.host.invalidate();
      }
      None => log::warn!("Badge color {color:?} can't be resolved, keep the current color."),
    }
  }

  fn paint_icon(&self, painter: &mut Painter) {
    // resolved on every paint, never cached.
    let Some(icon) = self.host.resources().drawable(&self.icon) else {
      log::trace!("Badge icon {} not found, skip painting it.", self.icon);
      return;
    };
    let bounds = self.icon_padding.deflate(&painter.clip_bounds());
    painter.draw_drawable(icon, bounds, Some(ColorFilterMatrix::src_in(self.icon_color)));
  }
}

// Circle
impl CircularBadge {
  /// The radius of the disc in dp.
  pub fn circle_radius(&self) -> f32 { self.px_to_dp(self.circle_radius) }

  pub fn set_circle_radius(&mut self, dp: f32) {
    self.circle_radius = self.dp_to_px(dp);
    self.relayout();
  }

  pub fn circle_color(&self) -> Color { self.circle_color }

  pub fn set_circle_color(&mut self, color: impl Into<ColorRef>) {
    self.update_color(color.into(), |this| &mut this.circle_color);
  }
}

// Stroke
impl CircularBadge {
  /// The width of the stroke ring in dp, zero means no ring.
  pub fn stroke_width(&self) -> f32 { self.px_to_dp(self.stroke_width) }

  pub fn set_stroke_width(&mut self, dp: f32) {
    self.stroke_width = self.dp_to_px(dp);
    self.relayout();
  }

  pub fn stroke_color(&self) -> Color { self.stroke_color }

  pub fn set_stroke_color(&mut self, color: impl Into<ColorRef>) {
    self.update_color(color.into(), |this| &mut this.stroke_color);
  }

  /// The gap between the disc and the stroke ring in dp.
  pub fn stroke_padding(&self) -> f32 { self.px_to_dp(self.stroke_padding) }

  pub fn set_stroke_padding(&mut self, dp: f32) {
    self.stroke_padding = self.dp_to_px(dp);
    self.relayout();
  }
}

// Icon
impl CircularBadge {
  pub fn icon_color(&self) -> Color { self.icon_color }

  pub fn set_icon_color(&mut self, color: impl Into<ColorRef>) {
    self.update_color(color.into(), |this| &mut this.icon_color);
  }

  pub fn icon(&self) -> &IconId { &self.icon }

  pub fn set_icon(&mut self, icon: IconId) {
    self.icon = icon;
    self.host.invalidate();
  }
}

// Icon paddings, in dp.
impl CircularBadge {
  pub fn icon_top_padding(&self) -> f32 { self.px_to_dp(self.icon_padding.top) }

  pub fn set_icon_top_padding(&mut self, dp: f32) {
    self.icon_padding.top = self.dp_to_px(dp);
    self.host.invalidate();
  }

  pub fn icon_bottom_padding(&self) -> f32 { self.px_to_dp(self.icon_padding.bottom) }

  pub fn set_icon_bottom_padding(&mut self, dp: f32) {
    self.icon_padding.bottom = self.dp_to_px(dp);
    self.host.invalidate();
  }

  pub fn icon_left_padding(&self) -> f32 { self.px_to_dp(self.icon_padding.left) }

  pub fn set_icon_left_padding(&mut self, dp: f32) {
    self.icon_padding.left = self.dp_to_px(dp);
    self.host.invalidate();
  }

  pub fn icon_right_padding(&self) -> f32 { self.px_to_dp(self.icon_padding.right) }

  pub fn set_icon_right_padding(&mut self, dp: f32) {
    self.icon_padding.right = self.dp_to_px(dp);
    self.host.invalidate();
  }
}

impl Render for CircularBadge {
  fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
    let desired = self.desired_extent();
    Size::new(width.resolve(desired), height.resolve(desired))
  }

  fn paint(&self, ctx: &mut PaintingCtx) {
    let size = ctx.box_size();
    let center = Point::new(size.width / 2., size.height / 2.);
    let painter = ctx.painter();

    if self.stroke_width > 0. {
      painter
        .set_style(PaintStyle::Stroke)
        .set_brush(self.stroke_color)
        .set_line_width(self.stroke_width)
        .draw_circle(center, self.stroke_radius());
    }

    // The disc goes over the ring to cover its inner edge.
    painter
      .set_style(PaintStyle::Fill)
      .set_brush(self.circle_color)
      .draw_circle(center, self.circle_radius);

    self.paint_icon(painter);
  }
}
