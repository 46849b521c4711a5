use super::models::SongRecord;

/// Built-in song table: (title, artist, category, popularity score, listen URL).
/// Row order matters; it breaks ties between equal scores.
const BUILTIN_SONGS: &[(&str, &str, &str, f64, &str)] = &[
    // English, classic through 2010s
    ("Singin' in the Rain (1952)", "Gene Kelly", "English/Classic", 8.5, "https://www.youtube.com/watch?v=D1ZYhVpgXbQ"),
    ("Moon River (Breakfast at Tiffany's 1961)", "Audrey Hepburn", "English/Classic", 8.7, "https://www.youtube.com/watch?v=Q7o6w8JbT8U"),
    ("The Sound of Silence (The Graduate 1967)", "Simon & Garfunkel", "English/Classic", 8.8, "https://www.youtube.com/watch?v=4fK1c1950eM"),
    ("A Whole New World (Aladdin 1992)", "Brad Kane & Lea Salonga", "English/90s", 9.0, "https://www.youtube.com/watch?v=hG9E9X94T3Q"),
    ("My Heart Will Go On (Titanic 1997)", "Celine Dion", "English/90s", 9.9, "https://www.youtube.com/watch?v=FHG2FD4Ww7o"),
    ("Happy (Despicable Me 2013)", "Pharrell Williams", "English/2010s", 9.4, "https://www.youtube.com/watch?v=ZbZSe6N_BXs"),
    ("Shallow (A Star Is Born 2018)", "Lady Gaga & Bradley Cooper", "English/2010s", 9.6, "https://www.youtube.com/watch?v=bo_efYhYU2A"),
    // English, 2023-2025
    ("Speed Drive (Barbie 2023)", "Charli XCX", "English/Modern-2025", 9.7, "https://www.youtube.com/watch?v=BwE97H_xOTo"),
    ("Flowers (Miley Cyrus - Movie Playlist)", "Miley Cyrus", "English/Modern-2025", 9.8, "https://www.youtube.com/watch?v=G7KNmw9l7e4"),
    ("Woke Up in Love (2022/2023 Pop Hit)", "Kygo, Gryffin, Calum Scott", "English/Modern-2025", 9.5, "https://www.youtube.com/watch?v=1F3b1v8i2Kk"),
    ("Bones (Imagine Dragons - Movie Playlist)", "Imagine Dragons", "English/Modern-2025", 9.4, "https://www.youtube.com/watch?v=D6Fv6X0e_6Y"),
    ("I'm Good (Blue) (2023 Pop Hit)", "David Guetta & Bebe Rexha", "English/Modern-2025", 9.6, "https://www.youtube.com/watch?v=Vl3rP86xRk0"),
    ("Way of Water Theme (Avatar 3 2025)", "Simon Franglen", "English/Modern-2025", 9.6, "https://www.youtube.com/watch?v=new-en-A3"),
    ("Impossible Mission (MI 8 2025)", "Lorne Balfe", "English/Modern-2025", 9.7, "https://www.youtube.com/watch?v=new-en-MI8"),
    ("Someday My Prince Will Come (Snow White 2025)", "Rachel Zegler", "English/Modern-2025", 9.5, "https://www.youtube.com/watch?v=new-en-SW"),
    ("The Eternal City (Gladiator 2 2025)", "Harry Gregson-Williams", "English/Modern-2025", 9.4, "https://www.youtube.com/watch?v=new-en-G2"),
    // Tamil, classic through 2020s
    ("Senthoora Poove (16 Vayathinile 1977)", "S. Janaki", "Tamil/Classic", 8.4, "https://www.youtube.com/watch?v=W-Lz01mGq4Q"),
    ("Chinna Chinna Aasai (Roja 1992)", "Minmini", "Tamil/90s", 9.2, "https://www.youtube.com/watch?v=vVjV-7P_F3o"),
    ("Kadhal Rojave (Roja 1992)", "S. P. Balasubrahmanyam", "Tamil/90s", 9.5, "https://www.youtube.com/watch?v=sS9d-8_tLwQ"),
    ("Nee Partha Vizhigal (Pudhiya Mugam 1993)", "Unni Krishnan", "Tamil/90s", 8.9, "https://www.youtube.com/watch?v=0kH8s4zPj6o"),
    ("Vaseegara (Minnale 2001)", "Hariharan", "Tamil/2000s", 9.1, "https://www.youtube.com/watch?v=H6Uo4748NqQ"),
    ("Enna Solla Pogirai (Kandukondain Kandukondain 2000)", "Shankar Mahadevan", "Tamil/2000s", 9.0, "https://www.youtube.com/watch?v=S012sW3D51M"),
    ("Vaathi Coming (Master 2021)", "Anirudh Ravichander", "Tamil/2020s", 9.7, "https://www.youtube.com/watch?v=d_kS_j_P5Lw"),
    ("Naatu Naatu (RRR Tamil Dub 2022)", "Rahul Sipligunj & Kaala Bhairava", "Tamil/2020s", 9.6, "https://www.youtube.com/watch?v=3R-9tIuXh0I"),
    // Tamil, 2021-2025
    ("Manasilaayo (Vettaiyan 2025)", "Anirudh Ravichander & Co.", "Tamil/Modern-2025", 9.9, "https://www.youtube.com/watch?v=5WsUIeNAtbM"),
    ("Oorum Blood (Dude 2025)", "Sai Abhyankkar & Paal Dabba", "Tamil/Modern-2025", 9.6, "https://www.youtube.com/watch?v=4Bsc2uI_LsM"),
    ("Naa Ready (Leo 2023)", "Anirudh Ravichander & Vijay", "Tamil/Modern-2025", 9.7, "https://www.youtube.com/watch?v=42zC2G-jXwE"),
    ("Arabic Kuthu (Beast 2022)", "Anirudh & Jonita Gandhi", "Tamil/Modern-2025", 9.5, "https://www.youtube.com/watch?v=e_n0G0B1J_M"),
    ("Katchi Sera (Think Indie 2024)", "Sai Abhyankkar", "Tamil/Modern-2025", 9.4, "https://www.youtube.com/watch?v=cM35vXkX0-g"),
    ("Dippam Dappam (KRKK 2022)", "Anirudh Ravichander & Anthony Daasan", "Tamil/Modern-2025", 9.3, "https://www.youtube.com/watch?v=gT5-W-2l_sY"),
    ("Tum Tum (Enemy 2021)", "S. Thaman & Srivardhini", "Tamil/Modern-2025", 9.2, "https://www.youtube.com/watch?v=b0wX3Y-hW0E"),
    ("Vaa Thalaivaa (Thalaivar 171 2025)", "Anirudh Ravichander", "Tamil/Modern-2025", 9.8, "https://www.youtube.com/watch?v=new-tamil-T171"),
    ("Aayiram Kili (Indian 2 2025)", "A.R. Rahman & Shreya Ghoshal", "Tamil/Modern-2025", 9.5, "https://www.youtube.com/watch?v=new-tamil-I2"),
    ("Kadhal Mazhai (Vidaamuyarchi 2025)", "Yuvan Shankar Raja", "Tamil/Modern-2025", 9.6, "https://www.youtube.com/watch?v=new-tamil-VM"),
    ("Vetri Nadai (Captain Miller 2 2025)", "G.V. Prakash Kumar", "Tamil/Modern-2025", 9.3, "https://www.youtube.com/watch?v=new-tamil-CM2"),
];

/// Build the built-in song rows in table order.
pub fn builtin_songs() -> Vec<SongRecord> {
    BUILTIN_SONGS
        .iter()
        .map(|&(title, artist, category, score, url)| {
            SongRecord::new(title, artist, category, score, url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_row_count() {
        let songs = builtin_songs();
        assert_eq!(songs.len(), 35);
        assert_eq!(songs.iter().filter(|s| s.category.starts_with("English/")).count(), 16);
        assert_eq!(songs.iter().filter(|s| s.category.starts_with("Tamil/")).count(), 19);
    }

    #[test]
    fn test_builtin_rows_complete() {
        for (i, song) in builtin_songs().iter().enumerate() {
            assert_eq!(song.blank_field(), None, "row {i} has a blank field");
            assert!(song.popularity_score.is_finite(), "row {i} score");
            assert!(
                (8.0..=10.0).contains(&song.popularity_score),
                "row {i} score {} out of observed range",
                song.popularity_score
            );
            assert!(song.listen_url.starts_with("https://"), "row {i} url");
        }
    }

    #[test]
    fn test_builtin_order_preserved() {
        let songs = builtin_songs();
        assert_eq!(songs[0].title, "Singin' in the Rain (1952)");
        assert_eq!(songs[34].title, "Vetri Nadai (Captain Miller 2 2025)");
    }
}
