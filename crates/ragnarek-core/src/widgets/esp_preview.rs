//! ESP settings preview: a bordered panel with a mock player card.

use crate::{
    draw_list::TextureId,
    flags::ChildFlags,
    style::StyleColor,
    ui::Ui,
    Color, Rect, Vec2, WindowFlags,
};

const PANEL:  Vec2 = Vec2 { x: 200.0, y: 300.0 };
const BOX:    Vec2 = Vec2 { x: 70.0,  y: 130.0 };
const BAR_W:  f32  = 3.0;
const GAP:    f32  = 4.0;

/// Toggle / colour pairs mirrored by the preview. The colours are RGBA
/// channel arrays so the same storage can back colour pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct EspPreview {
    pub nickname: (bool, [f32; 4]),
    pub weapon:   (bool, [f32; 4]),
    pub zoom:     (bool, [f32; 4]),
    pub bomb:     (bool, [f32; 4]),
    pub c4:       (bool, [f32; 4]),
    pub money:    (bool, [f32; 4]),
    pub hit:      (bool, [f32; 4]),
    pub esp_box:  (bool, [f32; 4]),
    pub hp_line:  (bool, [f32; 4]),
    pub hp:       i32,
    pub hp_color: [f32; 4],
}

impl Default for EspPreview {
    fn default() -> Self {
        let white = [1.0; 4];
        Self {
            nickname: (true, white),
            weapon:   (true, white),
            zoom:     (true, white),
            bomb:     (true, white),
            c4:       (true, white),
            money:    (true, white),
            hit:      (true, white),
            esp_box:  (true, [37.0 / 255.0, 37.0 / 255.0, 47.0 / 255.0, 1.0]),
            hp_line:  (true, [112.0 / 255.0, 109.0 / 255.0, 214.0 / 255.0, 1.0]),
            hp:       85,
            hp_color: white,
        }
    }
}

fn centred_label(ui: &mut Ui<'_>, text: &str, centre_x: f32, y: f32, col: [f32; 4]) {
    let w = ui.text_width(text);
    ui.draw_text(text, Vec2::new(centre_x - w * 0.5, y), Color::from(col));
}

pub fn esp_preview(ui: &mut Ui<'_>, texture: Option<TextureId>, esp: &EspPreview) {
    if !ui.begin_child("ESP Preview", PANEL, ChildFlags::BORDER, WindowFlags::empty()) {
        ui.end_child();
        return;
    }

    let fs     = ui.font_size();
    let avail  = ui.content_region_avail();
    let origin = ui.cursor_screen_pos();
    let card_h = fs * 3.0 + GAP * 4.0 + BOX.y;
    ui.dummy(Vec2::new(avail.x, card_h));

    let centre_x = origin.x + avail.x * 0.5;
    let player   = Rect::from_min_size(Vec2::new(centre_x - BOX.x * 0.5, origin.y + fs + GAP), BOX);

    if esp.nickname.0 {
        centred_label(ui, "Player Name", centre_x, origin.y, esp.nickname.1);
    }

    if let Some(tex) = texture {
        ui.ctx.draw_list.image_quad(tex, player.min, player.max, Vec2::ZERO, Vec2::ONE, Color::WHITE);
    }
    if esp.esp_box.0 {
        ui.ctx.draw_list.rect_outline(player, 1.0, Color::from(esp.esp_box.1));
    }

    if esp.hp_line.0 {
        let bar  = Rect::from_min_size(Vec2::new(player.min.x - GAP - BAR_W, player.min.y), Vec2::new(BAR_W, BOX.y));
        let frac = esp.hp.clamp(0, 100) as f32 / 100.0;
        let fill = Rect::new(Vec2::new(bar.min.x, bar.max.y - bar.height() * frac), bar.max);
        let bg   = ui.color(StyleColor::FrameBg);
        ui.ctx.draw_list.filled_rect(bar, 0.0, bg);
        ui.ctx.draw_list.filled_rect(fill, 0.0, Color::from(esp.hp_line.1));
    }

    let mut y = player.max.y + GAP;
    if esp.weapon.0 {
        centred_label(ui, "AK-47", centre_x, y, esp.weapon.1);
        y += fs + GAP;
    }
    if esp.hp > 0 {
        centred_label(ui, &format!("HP: {}", esp.hp), centre_x, y, esp.hp_color);
    }

    // Flags stacked to the right of the box.
    let flags = [
        (esp.zoom,  "ZOOM"),
        (esp.bomb,  "BOMB"),
        (esp.c4,    "C4"),
        (esp.money, "$1337"),
    ];
    let mut fy = player.min.y;
    for ((on, col), text) in flags {
        if !on { continue; }
        ui.draw_text(text, Vec2::new(player.max.x + GAP, fy), Color::from(col));
        fy += fs + 2.0;
    }

    if esp.hit.0 {
        let c   = player.center();
        let col = Color::from(esp.hit.1);
        let (a, b) = (3.0, 8.0);
        for (dx, dy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            ui.ctx.draw_list.line(c + Vec2::new(dx * a, dy * a), c + Vec2::new(dx * b, dy * b), 1.5, col);
        }
    }

    ui.end_child();
}

#[cfg(test)]
mod tests {
    use super::EspPreview;
    use crate::testing::{context, in_window};
    use crate::TextureId;

    fn vertices(esp: &EspPreview, tex: Option<TextureId>) -> usize {
        let mut ctx = context();
        in_window(&mut ctx, |ui| {
            let before = ui.draw_list().vtx_buf.len();
            ui.esp_preview(tex, esp);
            ui.draw_list().vtx_buf.len() - before
        })
    }

    fn all_off() -> EspPreview {
        let mut esp = EspPreview::default();
        for pair in [
            &mut esp.nickname, &mut esp.weapon, &mut esp.zoom, &mut esp.bomb, &mut esp.c4,
            &mut esp.money, &mut esp.hit, &mut esp.esp_box, &mut esp.hp_line,
        ] {
            pair.0 = false;
        }
        esp.hp = 0;
        esp
    }

    #[test]
    fn each_toggle_gates_its_element() {
        let base = vertices(&all_off(), None);

        let mut esp = all_off();
        esp.nickname.0 = true;
        assert_eq!(vertices(&esp, None) - base, "Player Name".len() * 4);

        let mut esp = all_off();
        esp.c4.0 = true;
        assert_eq!(vertices(&esp, None) - base, "C4".len() * 4);
    }

    #[test]
    fn hp_text_only_when_alive() {
        let base = vertices(&all_off(), None);
        let mut esp = all_off();
        esp.hp = 85;
        assert_eq!(vertices(&esp, None) - base, "HP: 85".len() * 4);
    }

    #[test]
    fn texture_adds_one_quad() {
        let base = vertices(&all_off(), None);
        assert_eq!(vertices(&all_off(), Some(TextureId(7))) - base, 4);
    }

    #[test]
    fn outside_a_window_nothing_happens() {
        let mut ctx = context();
        let frame = ctx.frame(&crate::testing::TestFont, 1.0, |ui| ui.esp_preview(None, &EspPreview::default()));
        assert!(frame.draw_list.is_empty());
    }
}
