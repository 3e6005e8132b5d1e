//! UI module - contains UI rendering components
//!
//! Each component is a leaf: it renders its inputs (or its own constants)
//! and holds no state between frames.

pub mod components;
pub mod labeled_field;
pub mod stat_cards;
pub mod tips_panel;

/// Headless rendering helpers shared by component tests
#[cfg(test)]
pub(crate) mod test_support {
    use eframe::egui;

    /// A piece of text painted during a frame, with its top-left position.
    #[derive(Debug, Clone)]
    pub struct PaintedText {
        pub text: String,
        pub pos: egui::Pos2,
    }

    /// Run one frame on a fresh context and collect every painted text galley.
    pub fn render_texts(add_contents: impl FnMut(&mut egui::Ui)) -> Vec<PaintedText> {
        let ctx = egui::Context::default();
        render_texts_with(&ctx, egui::RawInput::default(), add_contents)
    }

    /// Run one frame on `ctx` with the given input and collect painted text.
    pub fn render_texts_with(
        ctx: &egui::Context,
        input: egui::RawInput,
        mut add_contents: impl FnMut(&mut egui::Ui),
    ) -> Vec<PaintedText> {
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut texts);
        }
        texts
    }

    fn collect_texts(shape: &egui::Shape, out: &mut Vec<PaintedText>) {
        match shape {
            egui::Shape::Text(text) => out.push(PaintedText {
                text: text.galley.text().to_owned(),
                pos: text.pos,
            }),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_texts(shape, out);
                }
            }
            _ => {}
        }
    }

    /// First painted text exactly equal to `needle`
    pub fn find<'a>(texts: &'a [PaintedText], needle: &str) -> Option<&'a PaintedText> {
        texts.iter().find(|t| t.text == needle)
    }
}
