//! Spanish translation (es-ES)

use super::keys::{
    CardTexts, DetailTexts, GalleryTexts, HeaderTexts, PaginationTexts, SearchTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    header: HeaderTexts {
        title: "FINAL SPACE",
        tagline: "Explora la tripulación y los personajes que conforman la aventura a través del universo de Final Space",
    },

    search: SearchTexts {
        placeholder: "Buscar personajes...",
        clear: "Limpiar búsqueda",
    },

    status: StatusTexts {
        loading: "Cargando personajes de Final Space...",
        load_failed: "Error al cargar los personajes. Por favor intenta nuevamente.",
    },

    gallery: GalleryTexts {
        heading: "Conoce a la Tripulación",
        hint: "Haz clic en cualquier personaje para saber más",
        empty: "No se encontraron personajes. Intenta con otra búsqueda.",
        previous: "Anterior",
        next: "Siguiente",
        pagination: PaginationTexts {
            total_label: "Total de personajes",
            page_label: "Página",
            of: "de",
        },
    },

    card: CardTexts {
        more_details: "Click para más detalles",
    },

    detail: DetailTexts {
        species: "Especie",
        gender: "Género",
        origin: "Origen",
        hair: "Cabello",
        aliases: "Alias / Apodos",
        abilities: "Habilidades Especiales",
        more_prefix: "...y",
        more_suffix: "más",
        close_hint: "Haz clic fuera para cerrar",
    },
};
