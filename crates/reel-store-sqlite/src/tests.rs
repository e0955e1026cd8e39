//! Integration tests for `SqliteStore` against an in-memory database.

use reel_core::{
  movie::{GenreViews, MovieInput},
  query::{FilterField, MovieFilter, Page, SortDirection, SortField, SortOrder},
  store::MovieStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn movie(title: &str, genre: &str) -> MovieInput {
  MovieInput {
    title:       title.into(),
    description: format!("{title}, the movie"),
    duration:    "2h".into(),
    artists:     "Somebody Famous".into(),
    genre:       genre.into(),
    watch_url:   format!("https://watch.example/{title}"),
    vote:        0,
    view_count:  0,
  }
}

/// Create a movie and then set its view count, since creation always starts
/// counters at zero.
async fn add_viewed(s: &SqliteStore, title: &str, genre: &str, views: i64) -> i64 {
  let created = s.create_movie(movie(title, genre)).await.unwrap();
  let mut input = movie(title, genre);
  input.view_count = views;
  s.update_movie(created.id, input).await.unwrap();
  created.id
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_forces_counters_to_zero() {
  let s = store().await;

  let mut input = movie("Heat", "Crime");
  input.vote = 40;
  input.view_count = 1_000;

  let created = s.create_movie(input).await.unwrap();
  assert_eq!((created.vote, created.view_count), (0, 0));

  let fetched = s.get_movie(created.id).await.unwrap().unwrap();
  assert_eq!((fetched.vote, fetched.view_count), (0, 0));
  assert_eq!(fetched.title, "Heat");
  assert_eq!(fetched.watch_url, "https://watch.example/Heat");
}

#[tokio::test]
async fn create_assigns_increasing_ids() {
  let s = store().await;
  let a = s.create_movie(movie("Alien", "Horror")).await.unwrap();
  let b = s.create_movie(movie("Aliens", "Action")).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_movie(404).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_every_mutable_field() {
  let s = store().await;
  let created = s.create_movie(movie("Heat", "Crime")).await.unwrap();

  let replacement = MovieInput {
    title:       "Heat (1995)".into(),
    description: "LA crime saga".into(),
    duration:    "2h 50m".into(),
    artists:     "Pacino, De Niro".into(),
    genre:       "Thriller".into(),
    watch_url:   "https://watch.example/heat-1995".into(),
    vote:        12,
    view_count:  345,
  };
  s.update_movie(created.id, replacement.clone()).await.unwrap();

  let fetched = s.get_movie(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, reel_core::movie::Movie::from_input(created.id, replacement));
}

#[tokio::test]
async fn update_missing_row_is_a_silent_noop() {
  let s = store().await;
  let created = s.create_movie(movie("Heat", "Crime")).await.unwrap();

  s.update_movie(created.id + 100, movie("Ghost", "Drama")).await.unwrap();

  assert!(s.get_movie(created.id + 100).await.unwrap().is_none());
  assert_eq!(s.get_movie(created.id).await.unwrap().unwrap().title, "Heat");
}

#[tokio::test]
async fn increment_vote_reports_whether_a_row_matched() {
  let s = store().await;
  let created = s.create_movie(movie("Heat", "Crime")).await.unwrap();

  assert!(s.increment_vote(created.id).await.unwrap());
  assert!(s.increment_vote(created.id).await.unwrap());
  assert!(!s.increment_vote(created.id + 1).await.unwrap());

  assert_eq!(s.get_movie(created.id).await.unwrap().unwrap().vote, 2);
}

// ─── Sorted / aggregate ──────────────────────────────────────────────────────

#[tokio::test]
async fn sorted_lookup_on_empty_table_is_none() {
  let s = store().await;
  let order = SortOrder::by(SortField::ViewCount, SortDirection::Desc);
  assert!(s.get_one_sorted_by(&order).await.unwrap().is_none());
}

#[tokio::test]
async fn sorted_lookup_returns_extremum() {
  let s = store().await;
  add_viewed(&s, "Heat", "Crime", 10).await;
  let top = add_viewed(&s, "Ronin", "Crime", 50).await;
  let bottom = add_viewed(&s, "Up", "Family", 1).await;

  let desc = SortOrder::by(SortField::ViewCount, SortDirection::Desc);
  assert_eq!(s.get_one_sorted_by(&desc).await.unwrap().unwrap().id, top);

  let asc = SortOrder::by(SortField::ViewCount, SortDirection::Asc);
  assert_eq!(s.get_one_sorted_by(&asc).await.unwrap().unwrap().id, bottom);
}

#[tokio::test]
async fn sorted_lookup_with_several_fields() {
  let s = store().await;
  add_viewed(&s, "B", "Crime", 10).await;
  let last = add_viewed(&s, "A", "Crime", 10).await;

  // `genre,id DESC`: genre ascending, then the highest id.
  let order =
    SortOrder::new(vec![SortField::Genre, SortField::Id], SortDirection::Desc).unwrap();
  assert_eq!(s.get_one_sorted_by(&order).await.unwrap().unwrap().id, last);
}

#[tokio::test]
async fn most_viewed_genre_sums_per_genre() {
  let s = store().await;
  add_viewed(&s, "Heat", "A", 10).await;
  add_viewed(&s, "Ronin", "A", 5).await;
  add_viewed(&s, "Up", "B", 3).await;

  let top = s.most_viewed_genre().await.unwrap();
  assert_eq!(top, Some(GenreViews { genre: "A".into(), view_count: 15 }));
}

#[tokio::test]
async fn most_viewed_genre_on_empty_table_is_none() {
  let s = store().await;
  assert!(s.most_viewed_genre().await.unwrap().is_none());
}

// ─── Pagination ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn pages_follow_id_order() {
  let s = store().await;
  let mut ids = Vec::new();
  for n in 0..25 {
    ids.push(s.create_movie(movie(&format!("Movie {n}"), "Drama")).await.unwrap().id);
  }

  let page1 = s.list_movies(Page::new(1, 10).unwrap()).await.unwrap();
  assert_eq!(page1.iter().map(|m| m.id).collect::<Vec<_>>(), ids[0..10]);

  let page2 = s.list_movies(Page::new(2, 10).unwrap()).await.unwrap();
  assert_eq!(page2.iter().map(|m| m.id).collect::<Vec<_>>(), ids[10..20]);

  let page3 = s.list_movies(Page::new(3, 10).unwrap()).await.unwrap();
  assert_eq!(page3.len(), 5);

  let page4 = s.list_movies(Page::new(4, 10).unwrap()).await.unwrap();
  assert!(page4.is_empty());
}

#[tokio::test]
async fn zero_per_page_is_empty() {
  let s = store().await;
  s.create_movie(movie("Heat", "Crime")).await.unwrap();
  let page = s.list_movies(Page::new(1, 0).unwrap()).await.unwrap();
  assert!(page.is_empty());
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_filter_returns_every_row() {
  let s = store().await;
  for title in ["Heat", "Ronin", "Up"] {
    s.create_movie(movie(title, "Drama")).await.unwrap();
  }
  let all = s.search_movies(&MovieFilter::new()).await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn genre_filter_is_case_sensitive_substring() {
  let s = store().await;
  s.create_movie(movie("Die Hard", "Action")).await.unwrap();
  s.create_movie(movie("Hot Fuzz", "Action Comedy")).await.unwrap();
  s.create_movie(movie("Lowercase", "action")).await.unwrap();
  s.create_movie(movie("Amour", "Drama")).await.unwrap();

  let filter = MovieFilter::new().with(FilterField::Genre, "Action");
  let found = s.search_movies(&filter).await.unwrap();

  let titles: Vec<_> = found.iter().map(|m| m.title.as_str()).collect();
  assert_eq!(titles, vec!["Die Hard", "Hot Fuzz"]);
}

#[tokio::test]
async fn filters_combine_with_and() {
  let s = store().await;
  s.create_movie(movie("Die Hard", "Action")).await.unwrap();
  s.create_movie(movie("Die Another Day", "Spy")).await.unwrap();
  s.create_movie(movie("Hard Target", "Action")).await.unwrap();

  let filter = MovieFilter::new()
    .with(FilterField::Title, "Die")
    .with(FilterField::Genre, "Action");
  let found = s.search_movies(&filter).await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].title, "Die Hard");
}

#[tokio::test]
async fn filter_values_are_bound_not_spliced() {
  let s = store().await;
  s.create_movie(movie("O'Brien", "Drama")).await.unwrap();

  let filter = MovieFilter::new().with(FilterField::Title, "O'Brien");
  assert_eq!(s.search_movies(&filter).await.unwrap().len(), 1);

  let hostile = MovieFilter::new().with(FilterField::Title, "' OR 1=1 --");
  assert!(s.search_movies(&hostile).await.unwrap().is_empty());
}

#[tokio::test]
async fn wildcard_characters_match_literally() {
  let s = store().await;
  s.create_movie(movie("Heat", "Crime")).await.unwrap();
  s.create_movie(movie("100% Wolf", "Animation")).await.unwrap();

  assert_eq!(title_matches(&s, "_").await, 0);
  assert_eq!(title_matches(&s, "%").await, 1);
  assert_eq!(title_matches(&s, "0% W").await, 1);
  assert_eq!(title_matches(&s, "H%t").await, 0);
}

async fn title_matches(s: &SqliteStore, value: &str) -> usize {
  let filter = MovieFilter::new().with(FilterField::Title, value);
  s.search_movies(&filter).await.unwrap().len()
}

#[tokio::test]
async fn search_with_no_match_is_empty_not_error() {
  let s = store().await;
  s.create_movie(movie("Heat", "Crime")).await.unwrap();
  let filter = MovieFilter::new().with(FilterField::Artists, "Nobody");
  assert!(s.search_movies(&filter).await.unwrap().is_empty());
}
