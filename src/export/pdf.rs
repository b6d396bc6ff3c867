//! PDF export built directly on lopdf. The document is a centered title
//! followed by a bordered 4-column table at 80% page width; rows flow onto
//! continuation pages when a page fills. Content streams are left
//! uncompressed so the output stays inspectable.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Error, Object, ObjectId, Stream, dictionary};

use crate::domain::staff::Staff;
use crate::export::{COLUMNS, record_cells};

const TITLE: &str = "Staff Data";

// A4 in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;

const TABLE_WIDTH: f32 = PAGE_WIDTH * 0.8;
const TABLE_LEFT: f32 = (PAGE_WIDTH - TABLE_WIDTH) / 2.0;
const COLUMN_WIDTH: f32 = TABLE_WIDTH / COLUMNS.len() as f32;
const ROW_HEIGHT: f32 = 20.0;
const BOTTOM_MARGIN: f32 = 50.0;

const TITLE_SIZE: f32 = 18.0;
const CELL_SIZE: f32 = 10.0;
// Average Helvetica glyph width as a fraction of the font size; close
// enough to center the title.
const GLYPH_WIDTH: f32 = 0.55;

const TITLE_FONT: &str = "F2";
const BODY_FONT: &str = "F1";

/// Renders the staff table as a multi-page A4 PDF.
pub fn render(staff: &[Staff]) -> Result<Vec<u8>, Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            BODY_FONT => regular,
            TITLE_FONT => bold,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let mut page = PageWriter::first();
    page.row(&COLUMNS.map(str::to_string), true);

    for record in staff {
        if page.is_full() {
            let finished = std::mem::replace(&mut page, PageWriter::continuation());
            kids.push(finish_page(&mut doc, pages_id, resources_id, finished)?.into());
        }
        page.row(&record_cells(record), false);
    }
    kids.push(finish_page(&mut doc, pages_id, resources_id, page)?.into());

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn finish_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page: PageWriter,
) -> Result<ObjectId, Error> {
    let content = Content {
        operations: page.operations,
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(PAGE_WIDTH),
            Object::Real(PAGE_HEIGHT),
        ],
        "Resources" => resources_id,
        "Contents" => content_id,
    }))
}

/// Accumulates content-stream operations for one page, tracking the top
/// edge of the next table row.
struct PageWriter {
    operations: Vec<Operation>,
    cursor: f32,
}

impl PageWriter {
    /// First page: centered bold title, table below it.
    fn first() -> Self {
        let mut page = Self {
            operations: Vec::new(),
            cursor: PAGE_HEIGHT - 70.0,
        };
        let width = TITLE.chars().count() as f32 * TITLE_SIZE * GLYPH_WIDTH;
        page.text(
            TITLE_FONT,
            TITLE_SIZE,
            (PAGE_WIDTH - width) / 2.0,
            PAGE_HEIGHT - 50.0,
            TITLE,
        );
        page
    }

    /// Continuation page: table only.
    fn continuation() -> Self {
        Self {
            operations: Vec::new(),
            cursor: PAGE_HEIGHT - 40.0,
        }
    }

    fn is_full(&self) -> bool {
        self.cursor - ROW_HEIGHT < BOTTOM_MARGIN
    }

    fn row(&mut self, cells: &[String; 4], bold: bool) {
        let bottom = self.cursor - ROW_HEIGHT;
        let font = if bold { TITLE_FONT } else { BODY_FONT };

        for (col, cell) in cells.iter().enumerate() {
            let left = TABLE_LEFT + COLUMN_WIDTH * col as f32;
            self.operations.push(Operation::new(
                "re",
                vec![
                    Object::Real(left),
                    Object::Real(bottom),
                    Object::Real(COLUMN_WIDTH),
                    Object::Real(ROW_HEIGHT),
                ],
            ));
            self.operations.push(Operation::new("S", vec![]));
            self.text(font, CELL_SIZE, left + 4.0, bottom + 6.0, cell);
        }

        self.cursor = bottom;
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Real(size)],
        ));
        self.operations.push(Operation::new(
            "Td",
            vec![Object::Real(x), Object::Real(y)],
        ));
        self.operations
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.operations.push(Operation::new("ET", vec![]));
    }
}
