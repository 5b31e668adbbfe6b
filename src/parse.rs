use crate::model::{Page, PageResponse};
use crate::{Error, Result};

/// Decodes a catalog response body into a `Page`.
/// Unknown fields (`config`, `info`, extra record fields) are ignored.
pub fn parse_page(page_num: u32, body: &str) -> Result<Page> {
    let response: PageResponse = serde_json::from_str(body).map_err(|source| Error::ParsePage {
        page: page_num,
        source,
    })?;

    Ok(Page {
        number: page_num,
        records: response.data,
        total: response.pagination.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "pagination": {
            "total": 129884,
            "limit": 12,
            "offset": 12,
            "total_pages": 10824,
            "current_page": 2,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=3"
        },
        "data": [
            {
                "id": 4,
                "api_model": "artworks",
                "title": "Priest and Boy",
                "place_of_origin": "England",
                "artist_display": "Lawrence Carmichael Earle\nAmerican, 1845-1921",
                "inscriptions": null,
                "date_start": 1880,
                "date_end": 1885
            },
            {
                "id": 27992,
                "title": "Nighthawks",
                "date_start": 1884,
                "date_end": 1886
            }
        ],
        "info": { "version": "1.13" }
    }"#;

    #[test]
    fn decodes_records_and_total() {
        let page = parse_page(2, BODY).expect("page");
        assert_eq!(page.number, 2);
        assert_eq!(page.total, 129884);
        assert_eq!(page.ids().collect::<Vec<_>>(), vec![4, 27992]);

        let first = &page.records[0];
        assert_eq!(first.title.as_deref(), Some("Priest and Boy"));
        assert_eq!(first.inscriptions, None);
        assert_eq!(first.date_end, Some(1885));
    }

    #[test]
    fn missing_text_fields_decode_as_none() {
        let page = parse_page(2, BODY).expect("page");
        let second = &page.records[1];
        assert_eq!(second.place_of_origin, None);
        assert_eq!(second.artist_display, None);
        assert_eq!(second.date_start, Some(1884));
    }

    #[test]
    fn empty_data_is_an_empty_page() {
        let page = parse_page(9, r#"{"data": [], "pagination": {"total": 0}}"#).expect("page");
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn missing_pagination_is_a_parse_error() {
        let err = parse_page(3, r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, Error::ParsePage { page: 3, .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn html_error_page_is_a_parse_error() {
        let err = parse_page(1, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::ParsePage { page: 1, .. }));
    }
}
