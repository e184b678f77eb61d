/// Literal marker that precedes the overview prose in a brainstorm response
pub const OVERVIEW_MARKER: &str = "---OVERVIEW---";

/// Literal marker that precedes the newline-delimited aspect list
pub const ASPECTS_MARKER: &str = "---ASPECTS---";

/// Build the brainstorm instruction for a bare subject.
///
/// Structured JSON output cannot be combined with the search tool, so the
/// response shape is pinned by the two literal markers instead of a schema.
pub fn build_brainstorm_prompt(subject: &str) -> String {
    format!(
        "Sujet : {subject}\n\
         Objectif : Aider un élève de primaire (CM1/CM2) à démarrer une recherche documentaire.\n\n\
         1. Rédige un très court paragraphe \"Survol\" (2-3 phrases max) qui explique simplement \
         ce qu'est ce sujet, basé sur des faits réels et fiables.\n\
         2. Propose exactement 5 aspects/sous-thèmes logiques et intéressants à explorer pour ce sujet.\n\n\
         IMPORTANT : Ne pas utiliser de Markdown gras/italique.\n\n\
         FORMAT DE SORTIE OBLIGATOIRE (Respecte strictement ces balises) :\n\
         Débute ta réponse par \"{OVERVIEW_MARKER}\" suivi du texte du survol.\n\
         Ensuite, saute une ligne et écris \"{ASPECTS_MARKER}\" suivi de la liste des 5 aspects \
         (un par ligne, sans numérotation)."
    )
}
