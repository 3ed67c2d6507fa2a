//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 구성 요약을 박스 형태로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  User API Server                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(50);
    format!("╔{0}╗\n║{1:^50}║\n╚{0}╝", border, title)
}

/// 설정 항목 한 줄을 출력합니다
///
/// ```text
///    ├─ Store: memory
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 요약을 출력합니다
pub fn print_startup_summary(bind_address: &str, store: &str, workers: usize) {
    println!();
    print_boxed_title("User API Server");
    print_sub_task("Listen", &format!("http://{}", bind_address));
    print_sub_task("Store", store);
    print_sub_task("Workers", &workers.to_string());
    println!();
}
