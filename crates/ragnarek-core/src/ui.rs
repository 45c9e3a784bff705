//! Main immediate-mode UI API surface.
//!
//! All widget calls go through `Ui`, which borrows `Context` mutably. Every
//! widget silently does nothing (and returns `false`) when no window or
//! child is open.

use crate::{
    context::Context,
    draw_list::{DrawList, TextureId},
    flags::{ChildFlags, ColorEditFlags, ComboFlags, SelectableFlags, SliderFlags},
    renderer::{FontAtlas, RenderFrame},
    style::{Style, StyleColor, StyleVar, StyleVarRestore},
    widgets::{self, esp_preview::EspPreview},
    Color, Rect, Vec2, WindowFlags,
};

// ─── Ui ──────────────────────────────────────────────────────────────────────

/// The immediate-mode API handle. Obtain one via [`Context::frame`].
pub struct Ui<'ctx> {
    pub(crate) ctx:   &'ctx mut Context,
    pub(crate) font:  &'ctx dyn FontAtlas,
    pub(crate) scale: f32,
}

impl<'ctx> Ui<'ctx> {
    #[doc(hidden)]
    pub fn new(ctx: &'ctx mut Context, font: &'ctx dyn FontAtlas, scale: f32) -> Self {
        Self { ctx, font, scale }
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    pub fn style(&self) -> &Style { &self.ctx.style }

    /// Replace the whole palette / metrics. Alpha takes effect immediately.
    pub fn style_mut(&mut self) -> &mut Style { &mut self.ctx.style }

    pub fn push_style_color(&mut self, var: StyleColor, col: Color) -> StyleColorToken {
        let old = self.ctx.style.colors[var as usize];
        self.ctx.style.colors[var as usize] = col;
        StyleColorToken { var, old }
    }

    pub fn pop_style_color(&mut self, tok: StyleColorToken) {
        self.ctx.style.colors[tok.var as usize] = tok.old;
    }

    pub fn push_style_var(&mut self, var: StyleVar) -> StyleVarToken {
        let r = self.ctx.style.push_var(var);
        self.ctx.sync_alpha();
        StyleVarToken(r)
    }

    pub fn pop_style_var(&mut self, tok: StyleVarToken) {
        self.ctx.style.pop_var(tok.0);
        self.ctx.sync_alpha();
    }

    // ── Layout ────────────────────────────────────────────────────────────────

    /// Continue on the previous item's line, separated by the style's item spacing.
    pub fn same_line(&mut self) {
        let sp = self.ctx.style.item_spacing.0;
        self.same_line_with(sp);
    }

    pub fn same_line_with(&mut self, spacing: f32) {
        if let Some(l) = self.ctx.current_layout_mut() { l.same_line(spacing); }
    }

    /// Insert blank space.
    pub fn dummy(&mut self, size: Vec2) {
        let sp = self.ctx.style.item_spacing;
        if let Some(l) = self.ctx.current_layout_mut() { l.dummy(size, sp); }
    }

    /// Explicit line break.
    pub fn new_line(&mut self) {
        let sp = self.ctx.style.item_spacing;
        if let Some(l) = self.ctx.current_layout_mut() { l.new_line(sp); }
    }

    /// Move the cursor, relative to the current container's content origin.
    pub fn set_cursor_pos(&mut self, pos: Vec2) {
        if let Some(l) = self.ctx.current_layout_mut() { l.set_cursor_pos(pos); }
    }

    pub fn cursor_pos(&self) -> Vec2 {
        self.ctx.current_window().map_or(Vec2::ZERO, |w| w.layout.cursor_pos())
    }

    /// Cursor in screen coordinates.
    pub fn cursor_screen_pos(&self) -> Vec2 {
        self.ctx.current_window().map_or(Vec2::ZERO, |w| w.layout.cursor)
    }

    pub fn begin_group(&mut self) {
        if let Some(l) = self.ctx.current_layout_mut() { l.begin_group(); }
    }

    pub fn end_group(&mut self) {
        let sp = self.ctx.style.item_spacing;
        if let Some(l) = self.ctx.current_layout_mut() { l.end_group(sp); }
    }

    /// Remaining width available on the current line.
    pub fn available_width(&self) -> f32 {
        self.ctx.current_window()
            .map(|w| w.layout.available_width())
            .unwrap_or(self.ctx.input.display_size.x)
    }

    /// Space left between the cursor and the container's bottom-right corner.
    pub fn content_region_avail(&self) -> Vec2 {
        self.ctx.current_window().map_or(self.ctx.input.display_size, |w| {
            Vec2::new(w.layout.available_width(), (w.rect.max.y - w.layout.cursor.y).max(0.0))
        })
    }

    /// Screen rectangle of the innermost open container.
    pub fn window_rect(&self) -> Rect {
        self.ctx.current_window().map_or(Rect::ZERO, |w| w.rect)
    }

    #[inline] pub fn window_pos(&self)  -> Vec2 { self.window_rect().min }
    #[inline] pub fn window_size(&self) -> Vec2 { self.window_rect().size() }

    /// Rectangle of the last placed item.
    pub fn item_rect(&self) -> Rect {
        self.ctx.current_window().map_or(Rect::ZERO, |w| w.layout.last_item)
    }

    // ── Display size / delta time ─────────────────────────────────────────────

    pub fn display_size(&self) -> Vec2  { self.ctx.input.display_size }
    pub fn delta_time(&self)   -> f32   { self.ctx.delta_time }
    pub fn mouse_pos(&self)    -> Vec2  { self.ctx.input.mouse_pos }

    // ── ID helpers ────────────────────────────────────────────────────────────

    pub fn push_id(&mut self, s: &str) { self.ctx.push_id(s); }
    pub fn pop_id(&mut self)           { self.ctx.pop_id(); }

    // ── Text ──────────────────────────────────────────────────────────────────

    pub fn text(&mut self, s: &str) {
        let c = self.ctx.style.color(StyleColor::Text);
        self.text_colored(c, s);
    }

    pub fn text_colored(&mut self, color: Color, text: &str) {
        let size = self.text_size(text);
        if let Some(pos) = self.layout_next(size) {
            self.draw_text(text, pos, color);
        }
    }

    /// Text aligned inside `rect`; `align` is (0,0) top-left … (1,1) bottom-right.
    pub fn text_center(&mut self, rect: Rect, color: Color, text: &str, align: Vec2) {
        widgets::text::text_center(self, rect, color, text, align);
    }

    // ── Windows ───────────────────────────────────────────────────────────────

    pub fn set_next_window_pos(&mut self, pos: Vec2)   { self.ctx.next_window_pos  = Some(pos); }
    pub fn set_next_window_size(&mut self, size: Vec2) { self.ctx.next_window_size = Some(size); }

    /// Begin a top-level window. Always call `end()` regardless of the result.
    pub fn begin(&mut self, name: &str, flags: WindowFlags) -> bool {
        widgets::window::begin(self, name, flags)
    }

    pub fn end(&mut self) {
        widgets::window::end(self);
    }

    /// Begin a child panel. Always call `end_child()` regardless of the result.
    pub fn begin_child(&mut self, name: &str, size: Vec2, child_flags: ChildFlags, window_flags: WindowFlags) -> bool {
        widgets::child::begin_child(self, name, size, child_flags, window_flags)
    }

    pub fn end_child(&mut self) {
        widgets::child::end_child(self);
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    /// Plain text button; `Vec2::ZERO` auto-sizes.
    pub fn button(&mut self, label: &str, size: Vec2) -> bool {
        widgets::button::button(self, label, size)
    }

    /// Sidebar tab drawn as a centred icon glyph.
    pub fn tab(&mut self, selected: bool, id: u32, icon: &str, size: Vec2) -> bool {
        widgets::button::tab(self, selected, id, icon, size)
    }

    pub fn icon_box(&mut self, icon: &str, size: Vec2, bg: Color, icon_col: Color, border: Color) -> bool {
        widgets::button::icon_box(self, icon, size, bg, icon_col, border)
    }

    pub fn color_button_simple(&mut self, name: &str, size: Vec2, bg: Color) -> bool {
        widgets::button::icon_box(self, name, size, bg, Color::WHITE, Color::BLACK)
    }

    // ── Checkbox ─────────────────────────────────────────────────────────────

    pub fn checkbox(&mut self, label: &str, v: &mut bool) -> bool {
        widgets::checkbox::checkbox(self, label, v)
    }

    pub fn checkbox_clicked(&mut self, label: &str, v: &mut bool) {
        widgets::checkbox::checkbox(self, label, v);
    }

    /// Checkbox with one colour swatch (3 or 4 channels).
    pub fn checkbox_picker(&mut self, label: &str, v: &mut bool, col: &mut [f32], flags: ColorEditFlags) -> bool {
        widgets::checkbox::checkbox_picker(self, label, v, &mut [col], flags)
    }

    pub fn checkbox_double_picker(
        &mut self,
        label: &str,
        v:     &mut bool,
        col1:  &mut [f32],
        col2:  &mut [f32],
        flags: ColorEditFlags,
    ) -> bool {
        widgets::checkbox::checkbox_picker(self, label, v, &mut [col1, col2], flags)
    }

    // ── Sliders ──────────────────────────────────────────────────────────────

    pub fn slider_float(&mut self, label: &str, v: &mut f32, min: f32, max: f32, format: &str, flags: SliderFlags) -> bool {
        widgets::slider::slider_float(self, label, v, min, max, format, flags)
    }

    pub fn slider_int(&mut self, label: &str, v: &mut i32, min: i32, max: i32, format: &str, flags: SliderFlags) -> bool {
        widgets::slider::slider_int(self, label, v, min, max, format, flags)
    }

    /// Two independent "min"/"max" sliders under one label. `power` is accepted
    /// for call-site compatibility and has no effect.
    pub fn range_slider_float(
        &mut self,
        label:  &str,
        lo:     &mut f32,
        hi:     &mut f32,
        min:    f32,
        max:    f32,
        format: &str,
        power:  f32,
    ) -> bool {
        widgets::slider::range_slider_float(self, label, lo, hi, min, max, format, power)
    }

    // ── Input text ───────────────────────────────────────────────────────────

    pub fn input_text_hint(&mut self, label: &str, hint: &str, buf: &mut String, size: Vec2) -> bool {
        widgets::input_text::input_text_hint(self, label, hint, buf, size)
    }

    // ── Combo / selectable ───────────────────────────────────────────────────

    /// `val` is the popup height hint in items (`<= 0` → from `flags`).
    /// Call `end_combo()` only when this returns `true`.
    pub fn begin_combo(&mut self, label: &str, preview: &str, val: i32, multi: bool, flags: ComboFlags) -> bool {
        widgets::combo::begin_combo(self, label, preview, val, multi, flags)
    }

    pub fn end_combo(&mut self) {
        widgets::combo::end_combo(self);
    }

    pub fn combo(&mut self, label: &str, current: &mut usize, items: &[&str], max_items: i32) -> bool {
        widgets::combo::combo(self, label, current, items, max_items)
    }

    pub fn multi_combo(&mut self, label: &str, values: &mut [bool], labels: &[&str]) {
        widgets::combo::multi_combo(self, label, values, labels);
    }

    pub fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool {
        widgets::combo::selectable(self, label, selected, flags, size)
    }

    /// Selectable bound to a flag; flips it on click.
    pub fn selectable_toggle(&mut self, label: &str, selected: &mut bool, flags: SelectableFlags, size: Vec2) -> bool {
        let clicked = self.selectable(label, *selected, flags, size);
        if clicked { *selected = !*selected; }
        clicked
    }

    // ── Color ────────────────────────────────────────────────────────────────

    /// Swatch + optional RGB(A) fields; `col` holds 3 or 4 channels.
    pub fn color_edit(&mut self, label: &str, col: &mut [f32], flags: ColorEditFlags) -> bool {
        widgets::color_picker::color_edit(self, label, col, flags)
    }

    pub fn color_edit3(&mut self, label: &str, col: &mut [f32; 3], flags: ColorEditFlags) -> bool {
        self.color_edit(label, col, flags)
    }

    pub fn color_edit4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags) -> bool {
        self.color_edit(label, col, flags)
    }

    pub fn color_picker4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags, ref_col: Option<[f32; 4]>) -> bool {
        widgets::color_picker::color_picker4(self, label, col, flags, ref_col)
    }

    pub fn color_button(&mut self, desc_id: &str, col: [f32; 4], flags: ColorEditFlags, size: Vec2) -> bool {
        widgets::color_picker::color_button(self, desc_id, col, flags, size)
    }

    // ── Keybind / preview ────────────────────────────────────────────────────

    pub fn keybind(&mut self, label: &str, key: &mut i32, show_label: bool) -> bool {
        widgets::keybind::keybind(self, label, key, show_label)
    }

    pub fn esp_preview(&mut self, texture: Option<TextureId>, esp: &EspPreview) {
        widgets::esp_preview::esp_preview(self, texture, esp);
    }

    // ── Image ─────────────────────────────────────────────────────────────────

    pub fn image(&mut self, texture: TextureId, size: Vec2, tint: Color) {
        if let Some(pos) = self.layout_next(size) {
            self.ctx.draw_list.image_quad(texture, pos, pos + size, Vec2::ZERO, Vec2::ONE, tint);
        }
    }

    // ── Custom drawing ────────────────────────────────────────────────────────

    /// The active draw layer (popup layer while a popup is being built).
    pub fn draw_list(&mut self) -> &mut DrawList { &mut self.ctx.draw_list }

    /// Emit text glyphs at `pos` (top-left) without touching the layout.
    pub fn draw_text(&mut self, text: &str, pos: Vec2, col: Color) {
        let fs = self.font_size();
        let mut x = pos.x;
        let mut glyphs: Vec<(Vec2, Vec2, Vec2, Vec2)> = Vec::with_capacity(text.len());
        for ch in text.chars() {
            match self.font.glyph(ch, fs) {
                Some(g) => {
                    let p_min = Vec2::new(x, pos.y + g.offset_y);
                    glyphs.push((p_min, p_min + g.size, g.uv_min, g.uv_max));
                    x += g.advance_x;
                }
                None => x += fs * 0.25,
            }
        }
        let tex = self.font.texture();
        self.ctx.draw_list.push_texture(tex);
        self.ctx.draw_list.add_text_raw(&glyphs, col);
        self.ctx.draw_list.pop_texture();
    }

    /// Size of a single line of text in the current font.
    pub fn text_size(&self, text: &str) -> Vec2 {
        Vec2::new(self.text_width(text), self.font_size())
    }

    // ─── Internal helpers ──────────────────────────────────────────────────────

    /// Place an item of explicit size; returns its top-left position.
    pub(crate) fn layout_next(&mut self, size: Vec2) -> Option<Vec2> {
        let sp = self.ctx.style.item_spacing;
        self.ctx.current_layout_mut().map(|l| l.place(size, sp))
    }

    #[inline]
    pub(crate) fn font_size(&self) -> f32 { self.ctx.style.font_size * self.scale }

    pub(crate) fn text_width(&self, text: &str) -> f32 {
        self.font.measure(text, self.font_size())
    }

    #[inline]
    pub(crate) fn color(&self, c: StyleColor) -> Color { self.ctx.style.color(c) }
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

#[must_use = "pass the token to pop_style_color"]
pub struct StyleColorToken {
    pub(crate) var: StyleColor,
    pub(crate) old: Color,
}

#[must_use = "pass the token to pop_style_var"]
pub struct StyleVarToken(pub(crate) StyleVarRestore);

// ─── Context extension: frame builder ────────────────────────────────────────

impl Context {
    /// Run one immediate-mode frame and return what it drew.
    ///
    /// ```rust,ignore
    /// let frame = ctx.frame(&font, 1.0, |ui| {
    ///     if ui.begin("Demo", WindowFlags::empty()) {
    ///         ui.text("Hello!");
    ///     }
    ///     ui.end();
    /// });
    /// renderer.render(frame);
    /// ```
    pub fn frame<F>(&mut self, font: &dyn FontAtlas, scale: f32, f: F) -> RenderFrame<'_>
    where
        F: FnOnce(&mut Ui<'_>),
    {
        self.new_frame();
        {
            let mut ui = Ui::new(self, font, scale);
            f(&mut ui);
        }
        self.end_frame()
    }
}
