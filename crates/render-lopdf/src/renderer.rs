use crate::error::RenderError;
use crate::helpers::{flip_y, mm_to_pt, to_win_ansi};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use solardocs_layout::{
    FontSpec, FontWeight, LaidOutDocument, LayoutElement, LineElement, PositionedElement,
    RectElement, TextElement,
};
use solardocs_resource::{DecodedImage, ImageData};
use solardocs_types::{Color, Size};
use std::io::Write;
use std::sync::Arc;

/// Entries for the PDF document information dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
}

impl DocumentInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }
}

/// Builds the whole PDF object graph in memory and serialises it.
pub struct PdfRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfRenderer {
    /// Renders `layout` with `images` aligned to `layout.images`.
    ///
    /// Slots whose image is `None` are left empty.
    pub fn render(
        layout: &LaidOutDocument,
        images: &[Option<Arc<DecodedImage>>],
        info: &DocumentInfo,
    ) -> Result<Vec<u8>, RenderError> {
        if images.len() != layout.images.len() {
            return Err(RenderError::SlotMismatch { slots: layout.images.len(), images: images.len() });
        }
        let mut renderer = Self::new();
        let xobjects = renderer.add_images(images)?;
        renderer.write_resources(xobjects);

        let width = mm_to_pt(layout.config.width);
        let height = mm_to_pt(layout.config.height);
        for elements in &layout.pages {
            let mut page = PageContext::new(layout.config.height);
            for el in elements {
                page.draw_element(el, layout, images);
            }
            renderer.add_page(page.finish(), width, height)?;
        }

        renderer.finish(info)
    }

    fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self { document, pages_id, resources_id, page_ids: Vec::new() }
    }

    fn add_images(&mut self, images: &[Option<Arc<DecodedImage>>]) -> Result<Dictionary, RenderError> {
        let mut xobjects = Dictionary::new();
        for (slot, image) in images.iter().enumerate() {
            if let Some(image) = image {
                let id = self.add_image(image)?;
                xobjects.set(image_name(slot), id);
            }
        }
        Ok(xobjects)
    }

    fn add_image(&mut self, image: &DecodedImage) -> Result<ObjectId, RenderError> {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "BitsPerComponent" => 8,
        };
        let stream = match &image.data {
            ImageData::Jpeg { bytes, components } => {
                dict.set("ColorSpace", if *components == 1 { "DeviceGray" } else { "DeviceRGB" });
                dict.set("Filter", "DCTDecode");
                Stream::new(dict, bytes.clone())
            }
            ImageData::Raw { rgb, alpha } => {
                dict.set("ColorSpace", "DeviceRGB");
                dict.set("Filter", "FlateDecode");
                if let Some(alpha) = alpha {
                    let mask = Stream::new(
                        dictionary! {
                            "Type" => "XObject",
                            "Subtype" => "Image",
                            "Width" => image.width as i64,
                            "Height" => image.height as i64,
                            "ColorSpace" => "DeviceGray",
                            "BitsPerComponent" => 8,
                            "Filter" => "FlateDecode",
                        },
                        deflate(alpha)?,
                    );
                    let mask_id = self.document.add_object(mask);
                    dict.set("SMask", mask_id);
                }
                Stream::new(dict, deflate(rgb)?)
            }
        };
        Ok(self.document.add_object(stream))
    }

    fn write_resources(&mut self, xobjects: Dictionary) {
        let mut fonts = Dictionary::new();
        for weight in [FontWeight::Normal, FontWeight::Bold] {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => weight.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(font_name(weight), self.document.add_object(font));
        }

        let mut resources = dictionary! { "Font" => fonts };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        self.document.objects.insert(self.resources_id, Object::Dictionary(resources));
    }

    fn add_page(&mut self, content: Content, width: f32, height: f32) -> Result<(), RenderError> {
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflate(&content.encode()?)?);
        let content_id = self.document.add_object(stream);
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        self.page_ids.push(self.document.add_object(page));
        Ok(())
    }

    fn finish(mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.document.add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let mut info_dict = Dictionary::new();
        let entries = [
            ("Title", &info.title),
            ("Subject", &info.subject),
            ("Author", &info.author),
            ("Creator", &info.creator),
        ];
        for (key, value) in entries {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                info_dict.set(key, Object::String(to_win_ansi(value), StringFormat::Literal));
            }
        }
        if !info_dict.is_empty() {
            let info_id = self.document.add_object(info_dict);
            self.document.trailer.set("Info", info_id);
        }

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        log::debug!("Rendered {} page(s), {} bytes", self.page_ids.len(), bytes.len());
        Ok(bytes)
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn font_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Normal => "F1",
        FontWeight::Bold => "F2",
    }
}

fn image_name(slot: usize) -> String {
    format!("Im{slot}")
}

// --- Internal Page Drawing Context ---

struct PageContext {
    /// Page height in millimetres.
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontWeight, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(
        &mut self,
        el: &PositionedElement,
        layout: &LaidOutDocument,
        images: &[Option<Arc<DecodedImage>>],
    ) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => self.draw_line(line, el),
            LayoutElement::Image(image) => {
                let slot = layout.images.get(image.slot);
                match (slot, images.get(image.slot)) {
                    (Some(slot), Some(Some(decoded))) => self.draw_image(image.slot, decoded, slot.bounds),
                    _ => log::trace!("Image slot {} has no decoded image, leaving it blank", image.slot),
                }
            }
        }
    }

    fn set_font(&mut self, font: FontSpec) {
        let wanted = Some((font.weight, font.size));
        if self.state.font != wanted {
            self.op("Tf", vec![Object::Name(font_name(font.weight).as_bytes().to_vec()), font.size.into()]);
            self.state.font = wanted;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.components();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width_mm: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.components();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        let width = mm_to_pt(width_mm);
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(text.font);
        self.set_fill_color(text.color);
        let x = mm_to_pt(el.x);
        let y = mm_to_pt(flip_y(el.y, self.page_height));
        self.op("Td", vec![x.into(), y.into()]);
        self.op("Tj", vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let x = mm_to_pt(el.x);
        let y = mm_to_pt(flip_y(el.y + el.height, self.page_height));
        let (w, h) = (mm_to_pt(el.width), mm_to_pt(el.height));
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
            self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
            self.op("f", vec![]);
        }
        if let Some(stroke) = rect.stroke {
            self.set_stroke(stroke, rect.line_width);
            self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
            self.op("S", vec![]);
        }
    }

    fn draw_line(&mut self, line: &LineElement, el: &PositionedElement) {
        let page_height = self.page_height;
        self.set_stroke(line.color, line.line_width);
        self.op("m", vec![mm_to_pt(el.x).into(), mm_to_pt(flip_y(el.y, page_height)).into()]);
        self.op("l", vec![mm_to_pt(line.x2).into(), mm_to_pt(flip_y(line.y2, page_height)).into()]);
        self.op("S", vec![]);
    }

    fn draw_image(&mut self, slot: usize, image: &DecodedImage, bounds: solardocs_types::Rect) {
        let placed = bounds.fit(Size::new(image.width as f32, image.height as f32));
        if placed.size().is_empty() {
            return;
        }
        let x = mm_to_pt(placed.x);
        let y = mm_to_pt(flip_y(placed.bottom(), self.page_height));
        let (w, h) = (mm_to_pt(placed.width), mm_to_pt(placed.height));
        self.op("q", vec![]);
        self.op("cm", vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()]);
        self.op("Do", vec![Object::Name(image_name(slot).into_bytes())]);
        self.op("Q", vec![]);
    }
}
