//! Textos de demonstração para a interface e para testes.

/// Pares (domínio, texto) cobrindo os dois idiomas e os dois vereditos.
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Rumor",
            "속보!! 익명의 관계자에 따르면 정부가 숨겨진 진실을 감추고 있다. 확실히 전례 없는 사건이다. 빨리 공유 부탁!!",
        ),
        (
            "Science",
            "2023년 5월 1일 서울대학교 연구 결과 발표에 따르면 참가자의 45%가 개선을 보였다. 김민수 교수는 논문에서 이를 설명했다.",
        ),
        (
            "Health",
            "According to a peer-reviewed study published by the Ministry of Health on March 3, 2021, 45 percent of patients improved, researchers said in a press release.",
        ),
        (
            "Clickbait",
            "BREAKING: you won't believe this shocking miracle cure they don't want you to know about. Share before it's deleted!!",
        ),
    ]
}
