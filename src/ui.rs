//! UI rendering: toolbar, status label, help overlay.

use crate::config::{Action, HelpOverlayStyle, ToolbarStyle};
use crate::draw::{Color, PaletteColor};
use crate::input::{InputState, Tool};
use crate::util::{Point, Rect};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Gap between toolbar buttons and around the toolbar edge
const TOOLBAR_MARGIN: i32 = 6;
/// Width of tool and action buttons
const BUTTON_WIDTH: i32 = 78;
/// Width of the export format chip
const FORMAT_CHIP_WIDTH: i32 = 56;
/// Extra gap between button groups
const GROUP_GAP: i32 = 12;
/// Corner radius for buttons
const BUTTON_RADIUS: f64 = 4.0;

/// Something clickable on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Tool(Tool),
    Clear,
    Save,
    Format,
    Swatch(PaletteColor),
}

impl ToolbarItem {
    /// The action a left click on this item triggers.
    pub fn action(self) -> Action {
        match self {
            ToolbarItem::Tool(tool) => tool_action(tool),
            ToolbarItem::Clear => Action::ClearCanvas,
            ToolbarItem::Save => Action::SaveImage,
            ToolbarItem::Format => Action::CycleExportFormat,
            ToolbarItem::Swatch(color) => color_action(color),
        }
    }
}

fn tool_action(tool: Tool) -> Action {
    match tool {
        Tool::Pencil => Action::SelectPencil,
        Tool::Line => Action::SelectLine,
        Tool::Rectangle => Action::SelectRectangle,
        Tool::Circle => Action::SelectCircle,
        Tool::Clear => Action::SelectClear,
    }
}

fn color_action(color: PaletteColor) -> Action {
    match color {
        PaletteColor::Black => Action::SetColorBlack,
        PaletteColor::Red => Action::SetColorRed,
        PaletteColor::Green => Action::SetColorGreen,
        PaletteColor::Blue => Action::SetColorBlue,
        PaletteColor::Yellow => Action::SetColorYellow,
    }
}

/// Toolbar button with its window-space hit box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub item: ToolbarItem,
    pub rect: Rect,
}

/// Laid-out toolbar strip along the top of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    buttons: Vec<ToolbarButton>,
    status: Rect,
    width: i32,
    height: i32,
}

impl Toolbar {
    /// Lays out the buttons left to right for a window `width` pixels wide.
    ///
    /// Buttons that would not fit are dropped from the right; the status
    /// label takes whatever space remains.
    pub fn layout(width: i32, height: i32) -> Self {
        let button_height = (height - TOOLBAR_MARGIN * 2).max(1);
        let mut items: Vec<(ToolbarItem, i32, i32)> = Vec::new();

        for tool in [Tool::Pencil, Tool::Line, Tool::Rectangle, Tool::Circle] {
            items.push((ToolbarItem::Tool(tool), BUTTON_WIDTH, 0));
        }
        items.push((ToolbarItem::Clear, BUTTON_WIDTH, GROUP_GAP));
        items.push((ToolbarItem::Save, BUTTON_WIDTH, 0));
        items.push((ToolbarItem::Format, FORMAT_CHIP_WIDTH, 0));
        for (i, color) in PaletteColor::ALL.into_iter().enumerate() {
            let gap = if i == 0 { GROUP_GAP } else { 0 };
            items.push((ToolbarItem::Swatch(color), button_height, gap));
        }

        let mut buttons = Vec::with_capacity(items.len());
        let mut x = TOOLBAR_MARGIN;
        for (item, button_width, gap) in items {
            x += gap;
            if x + button_width + TOOLBAR_MARGIN > width {
                log::debug!("Toolbar too narrow for {:?} at width {}", item, width);
                break;
            }
            buttons.push(ToolbarButton {
                item,
                rect: Rect::new(x, TOOLBAR_MARGIN, button_width, button_height),
            });
            x += button_width + TOOLBAR_MARGIN;
        }

        let status_x = x + GROUP_GAP;
        let status = Rect::new(
            status_x,
            TOOLBAR_MARGIN,
            width - status_x - TOOLBAR_MARGIN,
            button_height,
        );

        Self {
            buttons,
            status,
            width,
            height,
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    /// Area reserved for the status label.
    pub fn status_rect(&self) -> Rect {
        self.status
    }

    /// True if `point` (window coordinates) lies on the toolbar strip.
    pub fn contains(&self, point: Point) -> bool {
        Rect::new(0, 0, self.width, self.height).contains(point)
    }

    /// Returns the item under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<ToolbarItem> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(point))
            .map(|button| button.item)
    }
}

/// Renders the toolbar with the current selection highlighted.
pub fn render_toolbar(ctx: &cairo::Context, input_state: &InputState, style: &ToolbarStyle) {
    let toolbar = &input_state.toolbar;
    let _ = ctx.save();

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(0.0, 0.0, toolbar.width() as f64, toolbar.height() as f64);
    let _ = ctx.fill();

    let font = pango::FontDescription::from_string(&format!(
        "{} {}",
        style.font_family,
        style.font_size.round() as i32
    ));
    let text_color = Color::from_array(style.text_color);

    for button in toolbar.buttons() {
        let rect = button.rect;
        match button.item {
            ToolbarItem::Swatch(color) => {
                rounded_rect(ctx, rect);
                color.to_color().apply(ctx);
                let _ = ctx.fill();
                if color == input_state.selection.color {
                    ctx.set_line_width(3.0);
                    Color::from_array(style.active_color).apply(ctx);
                    rounded_rect(ctx, rect);
                    let _ = ctx.stroke();
                }
            }
            ToolbarItem::Tool(tool) => {
                let active = tool == input_state.selection.tool;
                draw_button(ctx, rect, tool.label(), active, style, &font);
            }
            ToolbarItem::Clear => {
                let armed = input_state.selection.tool == Tool::Clear;
                draw_button(ctx, rect, "Clear", armed, style, &font);
            }
            ToolbarItem::Save => draw_button(ctx, rect, "Save", false, style, &font),
            ToolbarItem::Format => {
                let label = input_state.export_format.label();
                draw_button(ctx, rect, label, false, style, &font);
            }
        }
    }

    let status = toolbar.status_rect();
    if status.width > 0 {
        draw_label(ctx, &status_text(input_state), status, &font, text_color, false);
    }

    let _ = ctx.restore();
}

/// Text shown to the right of the buttons.
pub fn status_text(input_state: &InputState) -> String {
    let mut text = format!(
        "{} / {} / {}",
        input_state.selection.tool,
        input_state.selection.color,
        input_state.export_format
    );
    if let Some(message) = input_state.status_message() {
        text.push_str("  ");
        text.push_str(message);
    }
    text
}

fn draw_button(
    ctx: &cairo::Context,
    rect: Rect,
    label: &str,
    active: bool,
    style: &ToolbarStyle,
    font: &pango::FontDescription,
) {
    let fill = if active {
        style.active_color
    } else {
        style.button_color
    };
    rounded_rect(ctx, rect);
    Color::from_array(fill).apply(ctx);
    let _ = ctx.fill();
    draw_label(ctx, label, rect, font, Color::from_array(style.text_color), true);
}

fn rounded_rect(ctx: &cairo::Context, rect: Rect) {
    let x = rect.x as f64;
    let y = rect.y as f64;
    let w = rect.width as f64;
    let h = rect.height as f64;
    let r = BUTTON_RADIUS.min(w / 2.0).min(h / 2.0);
    let pi = std::f64::consts::PI;

    ctx.new_sub_path();
    ctx.arc(x + w - r, y + r, r, -pi / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, pi / 2.0);
    ctx.arc(x + r, y + h - r, r, pi / 2.0, pi);
    ctx.arc(x + r, y + r, r, pi, 3.0 * pi / 2.0);
    ctx.close_path();
}

fn draw_label(
    ctx: &cairo::Context,
    text: &str,
    rect: Rect,
    font: &pango::FontDescription,
    color: Color,
    centered: bool,
) {
    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(font));
    layout.set_text(text);
    layout.set_ellipsize(pango::EllipsizeMode::End);
    layout.set_width(rect.width * pango::SCALE);

    let (text_width, text_height) = layout.pixel_size();
    let center = rect.center();
    let x = if centered {
        (center.x - text_width / 2) as f64
    } else {
        rect.x as f64
    };
    let y = (center.y - text_height / 2) as f64;

    color.apply(ctx);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: i32,
    screen_height: i32,
) {
    let help_text = [
        "RASTERPAD CONTROLS",
        "",
        "  TOOLS                          COLORS",
        "    1 / P    Pencil                K    Black",
        "    2 / L    Line                  R    Red",
        "    3        Rectangle             G    Green",
        "    4 / C    Circle                B    Blue",
        "    5        Clear on click        Y    Yellow",
        "",
        "  ACTIONS",
        "    E              Clear canvas",
        "    Ctrl+S         Save image",
        "    F              Cycle PNG / JPEG / BMP",
        "    Right click    Cancel drag",
        "    Escape         Cancel drag, or quit when idle",
        "    Ctrl+Q         Quit",
        "    F1             Toggle help",
    ];

    let layout = pangocairo::functions::create_layout(ctx);
    let font = pango::FontDescription::from_string(&format!(
        "Monospace {}",
        style.font_size.round() as i32
    ));
    layout.set_font_description(Some(&font));

    let mut max_width = 0;
    for line in &help_text {
        layout.set_text(line);
        max_width = max_width.max(layout.pixel_size().0);
    }

    let box_width = max_width as f64 + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in help_text.iter().enumerate() {
        layout.set_text(line);
        ctx.move_to(
            box_x + style.padding,
            box_y + style.padding + i as f64 * style.line_height,
        );
        pangocairo::functions::show_layout(ctx, &layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_every_item_on_a_wide_window() {
        let toolbar = Toolbar::layout(1200, 50);
        let items: Vec<ToolbarItem> = toolbar.buttons().iter().map(|b| b.item).collect();
        assert_eq!(items.len(), 12);
        assert_eq!(items[0], ToolbarItem::Tool(Tool::Pencil));
        assert_eq!(items[4], ToolbarItem::Clear);
        assert_eq!(items[6], ToolbarItem::Format);
        assert_eq!(items[11], ToolbarItem::Swatch(PaletteColor::Yellow));
        assert!(toolbar.status_rect().width > 0);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let toolbar = Toolbar::layout(1200, 50);
        for pair in toolbar.buttons().windows(2) {
            assert!(pair[0].rect.right() <= pair[1].rect.x);
        }
    }

    #[test]
    fn narrow_window_drops_trailing_buttons() {
        let toolbar = Toolbar::layout(320, 50);
        assert!(toolbar.buttons().len() < 12);
        for button in toolbar.buttons() {
            assert!(button.rect.right() <= 320);
        }
    }

    #[test]
    fn hit_test_finds_buttons_and_gaps() {
        let toolbar = Toolbar::layout(1200, 50);
        let line = toolbar.buttons()[1];
        assert_eq!(
            toolbar.hit_test(line.rect.center()),
            Some(ToolbarItem::Tool(Tool::Line))
        );
        assert_eq!(toolbar.hit_test(Point::new(2, 2)), None);
        assert_eq!(toolbar.hit_test(Point::new(20, 200)), None);
    }

    #[test]
    fn contains_covers_full_strip() {
        let toolbar = Toolbar::layout(800, 50);
        assert!(toolbar.contains(Point::new(799, 49)));
        assert!(!toolbar.contains(Point::new(10, 50)));
    }

    #[test]
    fn items_map_to_actions() {
        assert_eq!(ToolbarItem::Clear.action(), Action::ClearCanvas);
        assert_eq!(ToolbarItem::Save.action(), Action::SaveImage);
        assert_eq!(ToolbarItem::Format.action(), Action::CycleExportFormat);
        assert_eq!(
            ToolbarItem::Tool(Tool::Circle).action(),
            Action::SelectCircle
        );
        assert_eq!(
            ToolbarItem::Swatch(PaletteColor::Green).action(),
            Action::SetColorGreen
        );
    }
}
