//! Button widgets: plain text button, sidebar tab, framed icon box.

use crate::{
    id::parse_label,
    style::StyleColor,
    ui::Ui,
    Color, Rect, Vec2,
};

pub fn button(ui: &mut Ui<'_>, label: &str, mut size: Vec2) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fp   = ui.ctx.style.frame_padding;
    let auto = ui.text_size(text) + Vec2::new(fp.0 * 2.0, fp.1 * 2.0);
    if size.x <= 0.0 { size.x = auto.x; }
    if size.y <= 0.0 { size.y = auto.y; }

    let Some(pos) = ui.layout_next(size) else { return false };
    let rect = Rect::from_min_size(pos, size);
    let (hovered, held, clicked) = ui.ctx.button_behavior(id, rect);

    let bg = if held && hovered { ui.color(StyleColor::ButtonActive) }
             else if hovered    { ui.color(StyleColor::ButtonHovered) }
             else               { ui.color(StyleColor::Button) };
    let tc = if hovered { ui.color(StyleColor::Text) } else { ui.color(StyleColor::TextHovered) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(rect, rounding, bg);

    let ts = ui.text_size(text);
    ui.draw_text(text, rect.min + (size - ts) * 0.5, tc);
    clicked
}

/// Sidebar page button: selected tabs use `ButtonActive`, others the
/// hover / idle button colours, with the icon glyph centred.
pub fn tab(ui: &mut Ui<'_>, selected: bool, tab_id: u32, icon: &str, size: Vec2) -> bool {
    let id = ui.ctx.make_id(&format!("##tab{tab_id}"));
    let Some(pos) = ui.layout_next(size) else { return false };
    let rect = Rect::from_min_size(pos, size);
    let (hovered, _, pressed) = ui.ctx.button_behavior(id, rect);

    let bg = if selected     { ui.color(StyleColor::ButtonActive) }
             else if hovered { ui.color(StyleColor::ButtonHovered) }
             else            { ui.color(StyleColor::Button) };
    let tc = if selected || hovered { ui.color(StyleColor::Text) } else { ui.color(StyleColor::TextInactive) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(rect, rounding, bg);

    let ts = ui.text_size(icon);
    ui.draw_text(icon, rect.min + (size - ts) * 0.5, tc);
    pressed
}

/// Filled box with a border and a centred glyph. Returns pressed.
pub fn icon_box(ui: &mut Ui<'_>, icon: &str, size: Vec2, bg: Color, icon_col: Color, border: Color) -> bool {
    let id = ui.ctx.make_id(icon);
    let Some(pos) = ui.layout_next(size) else { return false };
    let rect = Rect::from_min_size(pos, size);
    let (_, _, pressed) = ui.ctx.button_behavior(id, rect);

    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(rect, rounding, bg);
    ui.ctx.draw_list.rect_outline(rect, 1.0, border);

    let (display, _) = parse_label(icon);
    let ts = ui.text_size(display);
    ui.draw_text(display, rect.min + (size - ts) * 0.5, icon_col);
    pressed
}

#[cfg(test)]
mod tests {
    use crate::testing::{click_at, context, in_window, move_to};
    use crate::{Color, Vec2};

    #[test]
    fn tab_reports_press_not_selection() {
        let mut ctx = context();
        let size = Vec2::splat(47.0);
        assert!(!in_window(&mut ctx, |ui| ui.tab(true, 1, "c", size)));

        click_at(&mut ctx, Vec2::splat(20.0));
        assert!(in_window(&mut ctx, |ui| ui.tab(false, 1, "c", size)));
    }

    #[test]
    fn icon_box_clicks_only_inside() {
        let mut ctx = context();
        click_at(&mut ctx, Vec2::new(100.0, 10.0));
        let pressed = in_window(&mut ctx, |ui| {
            ui.icon_box("x", Vec2::splat(30.0), Color::BLACK, Color::WHITE, Color::BLACK)
        });
        assert!(!pressed);

        move_to(&mut ctx, Vec2::ZERO);
        click_at(&mut ctx, Vec2::new(10.0, 10.0));
        assert!(in_window(&mut ctx, |ui| ui.color_button_simple("x", Vec2::splat(30.0), Color::BLACK)));
    }

    #[test]
    fn auto_sized_button_wraps_its_label() {
        let mut ctx = context();
        in_window(&mut ctx, |ui| {
            ui.button("None", Vec2::ZERO);
            let fp = ui.style().frame_padding;
            let w  = 4.0 * crate::testing::TestFont::ADVANCE + fp.0 * 2.0;
            assert_eq!(ui.item_rect().width(), w);
        });
    }
}
