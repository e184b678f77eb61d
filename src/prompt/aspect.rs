use crate::research::{ResultMode, SearchOptions};

/// System instruction attached to every per-aspect query
pub const RESEARCH_SYSTEM_INSTRUCTION: &str = "Tu es un assistant pédagogique pour des enfants de 8 à 12 ans. \
     Tu aides à faire des recherches scolaires sérieuses.";

const FRENCH_ONLY_SOURCES: &str =
    "Règle source : Cherche UNIQUEMENT dans des sources francophones.";

const FOREIGN_SOURCES_ALLOWED: &str = "Règle source : Tu peux chercher dans des sources \
     Anglophones et Francophones (privilégie les sources anglophones sérieuses si elles sont \
     plus pertinentes, mais résume TOUJOURS en Français).";

/// Build the full instruction for one aspect of a subject
pub fn build_aspect_prompt(subject: &str, aspect: &str, options: &SearchOptions) -> String {
    let language_rule = if options.include_foreign_sources {
        FOREIGN_SOURCES_ALLOWED
    } else {
        FRENCH_ONLY_SOURCES
    };

    format!(
        "Sujet principal : {subject}\n\
         Aspect spécifique à rechercher : {aspect}\n\n\
         Tâche : Effectue une recherche pour des élèves de 8 à 12 ans sur cet aspect précis du sujet.\n\n\
         {language_rule}\n\n\
         Règles strictes de contenu :\n\
         1. Utilise UNIQUEMENT des sources sérieuses : sites gouvernementaux (.gov, .gouv), \
         encyclopédies reconnues (Larousse, Universalis, Britannica), dictionnaires en ligne, \
         grandes associations ou fondations.\n\
         2. N'utilise PAS Wikipédia, les blogs personnels ou les forums.\n\
         3. Le ton doit être joyeux mais professionnel.\n\
         4. Si tu ne trouves pas d'informations fiables sur cet aspect spécifique, dis-le poliment.\n\n\
         {format}",
        format = format_block(options.mode, aspect),
    )
}

fn format_block(mode: ResultMode, aspect: &str) -> String {
    match mode {
        ResultMode::SourcesOnly => format!(
            "FORMAT : \"Sources Uniquement\".\n\
             - Tâche : Trouve les 5 à 8 MEILLEURES pages web fiables pour que l'élève puisse \
             écrire son texte lui-même.\n\
             - Ne rédige PAS de résumé. Ton texte de réponse doit être une phrase unique : \
             \"Voici les sources trouvées pour t'aider à rédiger ton texte sur l'aspect : {aspect}.\"\n\
             - Concentre toute ta puissance de recherche sur la découverte de liens pertinents."
        ),
        ResultMode::ShortNotes => "FORMAT : \"Version Prise de notes (Style Télégraphique)\".\n\
             - Règle ABSOLUE : NE PAS rédiger de phrases complètes. INTERDICTION de faire des \
             phrases Sujet-Verbe-Complément.\n\
             - Utilise uniquement des mots-clés, des fragments de phrases ou des verbes à l'infinitif.\n\
             - Style télégraphique strict.\n\
             - Exemple CORRECT : \"Habitat : ruche, tronc d'arbre ou creux de rocher.\"\n\
             - Exemple INCORRECT (à ne pas faire) : \"Les abeilles vivent généralement dans des ruches.\"\n\
             - Le but est de donner la matière brute pour que l'élève soit OBLIGÉ de construire \
             ses phrases lui-même.\n\
             - Maximum 5 à 7 points clés."
            .to_string(),
        ResultMode::LongForm => "FORMAT : \"Version Longue (Explicative)\".\n\
             - Rédige un petit texte explicatif structuré.\n\
             - Inclus une courte phrase d'introduction et des détails intéressants.\n\
             - Utilise un ton pédagogique qui peut servir de modèle de rédaction."
            .to_string(),
    }
}
