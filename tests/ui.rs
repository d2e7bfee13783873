use cairo::{Context, ImageSurface};
use rasterpad::config::{HelpOverlayStyle, KeybindingsConfig, ToolbarStyle};
use rasterpad::draw::{BackingMode, PaletteColor, RenderStyle, Scene};
use rasterpad::export::ExportFormat;
use rasterpad::input::{InputState, Selection, Tool};
use rasterpad::ui::{ToolbarItem, render_help_overlay, render_toolbar, status_text};

fn make_input_state(width: i32) -> InputState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let scene = Scene::new(BackingMode::Raster, width, 300, RenderStyle::default()).unwrap();
    InputState::new(
        scene,
        Selection {
            tool: Tool::Line,
            color: PaletteColor::Red,
        },
        50,
        ExportFormat::Jpeg,
        action_map,
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_toolbar_draws_strip() {
    let input = make_input_state(1000);
    let (mut surface, ctx) = surface_with_context(1000, 50);
    render_toolbar(&ctx, &input, &ToolbarStyle::default());
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn toolbar_offers_every_tool_and_swatch_at_default_width() {
    let input = make_input_state(850);
    let items: Vec<ToolbarItem> = input.toolbar.buttons().iter().map(|b| b.item).collect();
    for tool in [Tool::Pencil, Tool::Line, Tool::Rectangle, Tool::Circle] {
        assert!(items.contains(&ToolbarItem::Tool(tool)), "missing {tool}");
    }
    for color in PaletteColor::ALL {
        assert!(items.contains(&ToolbarItem::Swatch(color)), "missing {color}");
    }
    assert!(items.contains(&ToolbarItem::Save));
    assert!(items.contains(&ToolbarItem::Format));
}

#[test]
fn status_text_reflects_selection_and_message() {
    let mut input = make_input_state(850);
    assert_eq!(status_text(&input), "Line / Red / JPEG");

    input.set_status_message("Saved drawing.jpg");
    assert!(status_text(&input).ends_with("Saved drawing.jpg"));
}

#[test]
fn render_help_overlay_draws_content() {
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    render_help_overlay(&ctx, &style, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}
